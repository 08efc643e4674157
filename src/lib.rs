//! # tsplib-nn
//!
//! Approximate tours for symmetric TSPLIB instances whose edge weights are
//! given explicitly as one diagonal-inclusive triangle
//! (`UPPER_DIAG_ROW` or `LOWER_DIAG_ROW`).
//!
//! ## Modules
//!
//! - [`instance`]: Instance decoding, validation, and TSPLIB output
//! - [`distance`]: Triangular index arithmetic, dense matrix, [`Distances`](distance::Distances) trait
//! - [`constructive`]: Constructive heuristics (Nearest Neighbor, Cheapest Insertion)
//! - [`evaluation`]: Tour length
//! - [`models`]: Tour, solution, and report types
//! - [`solver`]: Heuristic dispatch driven by [`config`]
//! - [`generate`]: Seeded random instances
//!
//! ## Example
//!
//! ```
//! use tsplib_nn::constructive::nearest_neighbor;
//! use tsplib_nn::evaluation::tour_length;
//! use tsplib_nn::instance::ProblemInstance;
//!
//! let inst: ProblemInstance = "\
//! DIMENSION : 4
//! EDGE_WEIGHT_FORMAT : UPPER_DIAG_ROW
//! EDGE_WEIGHT_SECTION
//! 0 10 15 20
//! 0 35 25
//! 0 30
//! 0
//! EOF
//! "
//! .parse()
//! .unwrap();
//!
//! let tour = nearest_neighbor(&inst).unwrap();
//! assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
//! assert_eq!(tour_length(&tour, &inst).unwrap(), 80);
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod generate;
pub mod instance;
pub mod models;
pub mod solver;

pub use error::{Error, Result};
