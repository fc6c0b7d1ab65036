//! Feature modules - one vertical slice per pipeline stage
//!
//! Leaf-first: `identifier` and `comment` are plain text transforms,
//! `noise_detection` holds the rule battery, `quality_gate` runs it against a
//! line, `cleaning` drives the whole docstring, and `admissibility` gates the
//! (function, docstring) pair before any text work happens.

pub mod identifier;
pub mod comment;
pub mod noise_detection;
pub mod quality_gate;
pub mod cleaning;
pub mod admissibility;
