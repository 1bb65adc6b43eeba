use crate::consts::{ALPHABET, ALPHABET_SIZE};
use crate::error::{SbResult, ShiftBreakError};

/// Position of `c` in the alphabet, or `None` for pass-through characters.
#[inline]
pub fn alphabet_index(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Folds any integer shift into `[0, 26)`. Negative shifts wrap forward.
#[inline]
pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_SIZE as i64) as u8
}

/// Caesar-encodes `text`. Characters outside `A..=Z` are copied unchanged.
pub fn encode(text: &str, shift: i64) -> String {
    let k = normalize_shift(shift) as usize;
    text.chars()
        .map(|c| match alphabet_index(c) {
            Some(idx) => ALPHABET[(idx + k) % ALPHABET_SIZE] as char,
            None => c,
        })
        .collect()
}

/// Inverse of [`encode`] for the same shift.
pub fn decode(text: &str, shift: i64) -> String {
    // Normalize first so `-i64::MIN` cannot overflow.
    encode(text, -(normalize_shift(shift) as i64))
}

/// Strict range check for callers that want to reject non-canonical keys.
pub fn validate_shift(shift: i64) -> SbResult<u8> {
    if !(0..ALPHABET_SIZE as i64).contains(&shift) {
        return Err(ShiftBreakError::InvalidShiftRange(shift));
    }
    Ok(shift as u8)
}

/// Parses a textual shift argument (CLI, config files).
pub fn parse_shift(raw: &str) -> SbResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ShiftBreakError::InvalidShiftType(raw.to_string()))
}
