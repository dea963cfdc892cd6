use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "mikor")]
#[command(about = "Convert Hungarian time expressions to clock times")]
#[command(long_about = "mikor - Convert Hungarian time expressions to clock times

Takes short Hungarian phrases describing a point or range in time and
prints the matching clock time or clock-time range.

QUICK START:
  mikor \"öt körül\"          Resolve one phrase
  mikor 5-kor este          Resolve several phrases
  echo \"két óra múlva\" | mikor    Resolve phrases line by line from stdin
  mikor --examples          Show a few sample phrases and their results

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

SUPPORTED PATTERNS:
  Exact hour:   5, öt, 5-kor, 5kor, öt órakor
  Around:       hat körül
  Before/after: öt előtt, öt után
  Now:          most, mostanában
  Dayparts:     reggel, délben, este
  Relative:     két óra múlva, három órán belül

Anything else resolves to \"approximately now, for the next hour\" and is
marked as unmatched.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for resolved phrases
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Print sample phrases with their resolutions and exit
    #[arg(long)]
    pub examples: bool,

    /// Phrases to resolve; with none given, phrases are read from stdin
    /// one per line
    pub phrases: Vec<String>,
}

/// Output format for resolved phrases.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
