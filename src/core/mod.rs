// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod config;
pub mod error;
pub mod function;
pub mod matrix;

// Re-export public types for convenient access via `qoracle::core::TypeName`
pub use config::OracleConfig;
pub use error::OracleError;
pub use function::{FunctionIdentity, OracleFunction};
pub use matrix::{Matrix, OracleMatrix};

pub mod constants;
pub use constants::oracle_constants::{DEFAULT_MAX_ORACLE_QUBITS, DEFAULT_MAX_SOLVER_BITS}; // Re-export
