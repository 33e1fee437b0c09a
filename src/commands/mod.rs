//! Command-line interface and orchestration for trustcard
//!
//! This module wires the other layers together: it parses the command line, loads the
//! configuration, reads the URL file, and drives scoring and output.
//!
//! # Implementation Model
//!
//! The `run` function parses command-line arguments using clap and hands the result to
//! the scoring workflow:
//!
//! 1. Initialize logging and load the configuration
//! 2. Parse and validate the whole URL file into artifact references
//! 3. Build the hub data provider
//! 4. Evaluate artifacts with bounded concurrency, keeping input order
//! 5. Write one NDJSON scorecard per artifact to the host's output
//!
//! The process boundary (stdout, stderr, exit) sits behind the [`Host`] trait so the
//! entire command can be driven in-process by tests.

mod common;
mod config;
mod host;
mod input;
mod run;
mod score;

pub use common::LogLevel;
pub use config::{CONFIG_FILE_NAME, Config};
pub use host::Host;
pub use input::parse_artifacts;
pub use run::run;
pub use score::{ScoreArgs, score_artifacts, score_url_file};
