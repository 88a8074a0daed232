//! Ember Core - Foundational types for the Ember engine
//!
//! This crate provides the types every other Ember crate depends on:
//! - `EmberError` - the workspace-wide error enum
//! - `Result` - result alias over `EmberError`

mod error;

pub use error::{EmberError, Result};
