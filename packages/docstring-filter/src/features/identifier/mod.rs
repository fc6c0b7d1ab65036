//! Identifier splitting
//!
//! Splits programming identifiers into lowercase word parts
//! (`getHTTPResponseCode` → `get http response code`).

mod splitter;

pub use splitter::split_identifier_into_parts;
