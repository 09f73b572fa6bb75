//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `suggest` - Fuzzy "did you mean" matching against known names
//! - `token` - String comparison and normalization

pub mod io;
pub mod suggest;
pub mod token;
