use proptest::prelude::*;

use tsplib_nn::config::{Heuristic, SolveConfig};
use tsplib_nn::constructive::{nearest_neighbor, nearest_neighbor_from};
use tsplib_nn::distance::{triangular_index, triangular_len, Distances, EdgeWeightFormat};
use tsplib_nn::instance::ProblemInstance;
use tsplib_nn::solver::solve;
use tsplib_nn::Error;

fn any_format() -> impl Strategy<Value = EdgeWeightFormat> {
    prop_oneof![
        Just(EdgeWeightFormat::UpperDiagRow),
        Just(EdgeWeightFormat::LowerDiagRow),
    ]
}

/// Arbitrary instance, diagonal cells included and not necessarily zero.
fn any_instance() -> impl Strategy<Value = ProblemInstance> {
    (1usize..24, any_format()).prop_flat_map(|(n, format)| {
        prop::collection::vec(0i64..1000, triangular_len(n).unwrap())
            .prop_map(move |weights| ProblemInstance::new(n, format, weights).unwrap())
    })
}

proptest! {
    #[test]
    fn nn_tour_is_a_closed_permutation(inst in any_instance()) {
        let n = inst.dimension();
        let tour = nearest_neighbor(&inst).unwrap();
        prop_assert_eq!(tour.path().len(), n + 1);
        prop_assert_eq!(tour.path()[0], 0);
        prop_assert_eq!(tour.path()[n], 0);
        let mut order = tour.order().to_vec();
        order.sort_unstable();
        prop_assert_eq!(order, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn nn_picks_a_nearest_unvisited_node(inst in any_instance()) {
        let n = inst.dimension();
        let tour = nearest_neighbor(&inst).unwrap();
        let order = tour.order();
        for step in 1..n {
            let current = order[step - 1];
            let chosen = order[step];
            for &other in &order[step..] {
                let (dc, doth) = (inst.distance(current, chosen), inst.distance(current, other));
                prop_assert!(dc < doth || (dc == doth && chosen <= other));
            }
        }
    }

    #[test]
    fn any_start_gives_valid_tours(inst in any_instance(), seed in any::<usize>()) {
        let n = inst.dimension();
        let start = seed % n;
        let tour = nearest_neighbor_from(&inst, start).unwrap();
        prop_assert!(tour.validate(n).is_ok());
        prop_assert_eq!(tour.start(), Some(start));

        let sol = solve(&inst, &SolveConfig::new(Heuristic::CheapestInsertion, start)).unwrap();
        prop_assert!(sol.tour().validate(n).is_ok());
        prop_assert_eq!(sol.tour().start(), Some(start));
    }

    #[test]
    fn distance_is_symmetric_with_zero_diagonal(inst in any_instance()) {
        let n = inst.dimension();
        for i in 0..n {
            prop_assert_eq!(inst.distance(i, i), 0);
            for j in 0..n {
                prop_assert_eq!(inst.distance(i, j), inst.distance(j, i));
            }
        }
    }

    #[test]
    fn lookups_match_the_stored_layout(inst in any_instance()) {
        // Walk the weights in file order and check each one lands on its cell.
        let n = inst.dimension();
        let mut pos = 0;
        for i in 0..n {
            let cols: Vec<usize> = match inst.format() {
                EdgeWeightFormat::UpperDiagRow => (i..n).collect(),
                EdgeWeightFormat::LowerDiagRow => (0..=i).collect(),
            };
            for j in cols {
                prop_assert_eq!(triangular_index(i, j, n, inst.format()), pos);
                if i != j {
                    prop_assert_eq!(inst.distance(i, j), inst.weights()[pos]);
                }
                pos += 1;
            }
        }
        prop_assert_eq!(pos, inst.weights().len());
    }

    #[test]
    fn length_equals_sum_of_edges(inst in any_instance()) {
        let sol = solve(&inst, &SolveConfig::default()).unwrap();
        let path = sol.tour().path();
        let mut total = 0;
        for k in 0..path.len() - 1 {
            total += inst.distance(path[k], path[k + 1]);
        }
        prop_assert_eq!(sol.length(), total);
    }

    #[test]
    fn short_weight_sections_are_rejected(n in 1usize..30, cut in 1usize..30, format in any_format()) {
        let expected = triangular_len(n).unwrap();
        let found = expected.saturating_sub(cut);
        let err = ProblemInstance::new(n, format, vec![1; found]).unwrap_err();
        let is_truncated = matches!(err, Error::TruncatedData { expected: e, found: f } if e == expected && f == found);
        prop_assert!(is_truncated);
    }

    #[test]
    fn tsplib_text_reads_back(inst in any_instance()) {
        let back: ProblemInstance = inst.to_tsplib().parse().unwrap();
        prop_assert_eq!(back, inst);
    }
}
