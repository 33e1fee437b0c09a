use super::Scorecard;
use crate::Result;
use ohno::IntoAppError;
use std::io::Write;

/// Write one scorecard as a single JSON line and flush it
pub fn write_ndjson<W: Write>(writer: &mut W, card: &Scorecard) -> Result<()> {
    serde_json::to_writer(&mut *writer, card).into_app_err_with(|| format!("serializing scorecard for '{}'", card.name))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
