//! Command-line interface for mikor.

pub mod args;
