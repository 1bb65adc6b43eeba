use crate::cipher::alphabet_index;
use crate::consts::{ALPHABET, ALPHABET_SIZE};
use serde::{Deserialize, Serialize};

/// One relative frequency per alphabet symbol, indexed `A = 0 .. Z = 25`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyDistribution {
    freqs: [f64; ALPHABET_SIZE],
}

/// Standard English letter frequencies (Emory University table).
pub static ENGLISH: FrequencyDistribution = FrequencyDistribution::new([
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, // A-G
    0.06094, 0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, // H-N
    0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056, 0.02758, // O-U
    0.00978, 0.02360, 0.00150, 0.01974, 0.00074, // V-Z
]);

impl FrequencyDistribution {
    pub const fn new(freqs: [f64; ALPHABET_SIZE]) -> Self {
        Self { freqs }
    }

    pub const fn zeroed() -> Self {
        Self {
            freqs: [0.0; ALPHABET_SIZE],
        }
    }

    /// Frequency of `letter`, `None` if it is not an alphabet symbol.
    pub fn get(&self, letter: char) -> Option<f64> {
        alphabet_index(letter).map(|i| self.freqs[i])
    }

    pub fn as_array(&self) -> &[f64; ALPHABET_SIZE] {
        &self.freqs
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        ALPHABET
            .iter()
            .zip(self.freqs.iter())
            .map(|(&c, &f)| (c as char, f))
    }

    pub fn total(&self) -> f64 {
        self.freqs.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.freqs.iter().all(|&f| f == 0.0)
    }

    /// Rescales so the entries sum to 1.0. An all-zero table stays all-zero.
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total <= 0.0 {
            return Self::zeroed();
        }
        let mut freqs = self.freqs;
        for f in freqs.iter_mut() {
            *f /= total;
        }
        Self { freqs }
    }
}

impl Default for FrequencyDistribution {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Raw per-letter counts plus the number of alphabet symbols seen.
pub fn letter_counts(text: &str) -> ([u64; ALPHABET_SIZE], u64) {
    let mut counts = [0u64; ALPHABET_SIZE];
    let mut total = 0u64;
    for idx in text.chars().filter_map(alphabet_index) {
        counts[idx] += 1;
        total += 1;
    }
    (counts, total)
}

/// Observed letter distribution of `text`. Non-alphabet characters do not
/// count toward the total; a text without letters yields all zeros.
pub fn letter_frequency(text: &str) -> FrequencyDistribution {
    let (counts, total) = letter_counts(text);
    if total == 0 {
        return FrequencyDistribution::zeroed();
    }
    let mut freqs = [0.0; ALPHABET_SIZE];
    for (f, &n) in freqs.iter_mut().zip(counts.iter()) {
        *f = n as f64 / total as f64;
    }
    FrequencyDistribution::new(freqs)
}
