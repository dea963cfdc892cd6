//! Phrase resolution for mikor.
//!
//! This module turns a Hungarian time phrase into an [`Interval`] by running
//! an ordered list of pattern rules; the first rule that matches wins.
//!
//! [`Interval`]: crate::core::Interval

mod rules;

pub use rules::{resolve, Resolution, Rule};
