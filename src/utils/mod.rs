//! Small helpers that are not tied to a particular graph algorithm.

mod dot;

pub use dot::{escape_dot, quote_dot};
