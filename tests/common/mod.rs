use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes a `method, amount` CSV with the given rows to a temporary file.
pub fn payments_csv(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "method, amount")?;
    for (method, amount) in rows {
        writeln!(file, "{}, {}", method, amount)?;
    }
    file.flush()?;
    Ok(file)
}
