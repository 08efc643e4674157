//! Problem instances: the validated triangle plus its TSPLIB reader and writer.

mod parser;
mod problem;
mod writer;

pub use parser::{read_instance, read_instance_file};
pub use problem::ProblemInstance;
