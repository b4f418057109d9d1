//! Storage containers used by the graph engines.

pub mod matrix;

pub use matrix::Matrix;
