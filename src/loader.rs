use crate::cipher::alphabet_index;
use crate::consts::ALPHABET_SIZE;
use crate::error::{SbResult, ShiftBreakError};
use crate::frequency::FrequencyDistribution;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Reads a `Letter,Frequency` CSV into a normalized reference distribution.
///
/// Letters are case-insensitive. Rows naming a non-alphabet symbol, or with a
/// negative / non-finite / unparsable frequency, are skipped. Raw counts are
/// accepted as well as proportions since the table is rescaled to sum to 1.
pub fn load_reference<R: Read>(reader: R) -> SbResult<FrequencyDistribution> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut raw = [0.0f64; ALPHABET_SIZE];
    let mut accepted = 0usize;

    for record in rdr.records() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }
        let mut letters = record[0].chars().flat_map(char::to_uppercase);
        let idx = match (letters.next().and_then(alphabet_index), letters.next()) {
            (Some(idx), None) => idx,
            _ => {
                debug!("Skipping reference row with letter '{}'", &record[0]);
                continue;
            }
        };
        match record[1].parse::<f64>() {
            Ok(f) if f.is_finite() && f >= 0.0 => {
                raw[idx] = f;
                accepted += 1;
            }
            _ => debug!("Skipping reference row with frequency '{}'", &record[1]),
        }
    }

    let dist = FrequencyDistribution::new(raw);
    if accepted == 0 || dist.total() <= 0.0 {
        return Err(ShiftBreakError::Validation(
            "Reference table contains no usable letter frequencies".to_string(),
        ));
    }

    info!("Loaded reference table ({} letters)", accepted);
    Ok(dist.normalized())
}

pub fn load_reference_from_file<P: AsRef<Path>>(path: P) -> SbResult<FrequencyDistribution> {
    let file = File::open(path)?;
    load_reference(file)
}
