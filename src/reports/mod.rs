//! Scorecard output
//!
//! A [`Scorecard`] is the flat, serializable record of one evaluated artifact. Field
//! order is part of the output contract, so the record is an explicit struct rather
//! than a map. Scorecards are written as newline-delimited JSON by [`write_ndjson`],
//! one record per line, flushing after each line so downstream consumers see results
//! as soon as each artifact is done.

mod ndjson;
mod scorecard;

pub use ndjson::write_ndjson;
pub use scorecard::{MODEL_CATEGORY, Scorecard};
