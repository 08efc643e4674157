//! Tour cost evaluation.

mod length;

pub use length::tour_length;
