//! Prepares the large JSON test fixture and its CBOR encoding for the parser tests.

pub mod api;
pub mod models;
pub mod utils;

pub use api::{prepare, prepare_with};
pub use models::{FixtureConfig, PrepareReport, Step, StepOutcome};
