//! mikor - Convert Hungarian time expressions to clock times
//!
//! This crate turns short Hungarian phrases describing a point or range in
//! time ("öt körül", "5-kor", "két óra múlva") into a normalized clock-time
//! or clock-time-range such as "04:30-05:30".

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod output;
pub mod resolver;

pub use crate::cli::args::{Cli, OutputFormat};
pub use crate::core::{Interval, CAN_BE_LATE};
pub use crate::error::MikorError;
pub use crate::resolver::{resolve, Resolution, Rule};
