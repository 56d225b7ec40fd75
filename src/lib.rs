// src/lib.rs

pub mod aggregate;
pub mod analyzer;
pub mod cli;
pub mod error;
pub mod model;
pub mod overlap;
pub mod parser;
pub mod projector;
pub mod renderer;

pub use analyzer::{analyze, analyze_file};
pub use error::{AnalysisError, RecordDefect};
pub use model::*;
