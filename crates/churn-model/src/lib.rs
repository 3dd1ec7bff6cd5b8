//! Core definitions for the churn dataset preparation tool.
//!
//! This crate holds the pieces every other crate agrees on: the source
//! column names and split parameters ([`schema`]), the fixed processing
//! directory layout ([`layout`]), and the error taxonomy ([`error`]).

pub mod error;
pub mod layout;
pub mod schema;

pub use error::{PrepError, Result};
pub use layout::{Partition, ProcessingLayout};
