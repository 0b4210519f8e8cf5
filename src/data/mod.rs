//! Research catalog: domain records and the mock-data generator.

pub mod generator;
pub mod model;

pub use model::Dataset;
