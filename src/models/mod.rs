//! Result types: closed tours, solutions, and per-instance reports.

mod solution;
mod tour;

pub use solution::{InstanceReport, Solution};
pub use tour::Tour;
