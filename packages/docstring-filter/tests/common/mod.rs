//! Common test utilities for docstring-filter
//!
//! Shared source fixtures, record builders and assertions for the
//! integration tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
