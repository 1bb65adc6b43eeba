use crate::error::SbResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Uppercases `raw` and strips everything that is neither alphanumeric nor
/// whitespace. Digits and whitespace survive and pass through the cipher.
pub fn clean_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Cleans `input` and writes the result to `output`.
pub fn clean_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> SbResult<PathBuf> {
    let content = fs::read_to_string(input.as_ref())?;
    let cleaned = clean_text(&content);
    fs::write(output.as_ref(), cleaned)?;
    info!("Processed file saved to: {}", output.as_ref().display());
    Ok(output.as_ref().to_path_buf())
}
