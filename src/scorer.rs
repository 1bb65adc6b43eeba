use crate::frequency::{letter_counts, FrequencyDistribution, ENGLISH};

/// Chi-squared distance between the letter counts of `text` and `reference`.
/// Lower is closer. Text without alphabet letters scores `+inf`.
pub fn chi_squared_against(reference: &FrequencyDistribution, text: &str) -> f64 {
    let (counts, total) = letter_counts(text);
    if total == 0 {
        return f64::INFINITY;
    }
    let n = total as f64;

    reference
        .as_array()
        .iter()
        .zip(counts.iter())
        .filter_map(|(&p, &observed)| {
            let expected = p * n;
            // Zero-probability letters carry no information and would divide by zero.
            if expected > 0.0 {
                let diff = observed as f64 - expected;
                Some(diff * diff / expected)
            } else {
                None
            }
        })
        .sum()
}

/// Chi-squared statistic against standard English.
pub fn chi_squared(text: &str) -> f64 {
    chi_squared_against(&ENGLISH, text)
}

/// Maximization form of [`chi_squared`]: higher means more English-like.
pub fn english_score(text: &str) -> f64 {
    -chi_squared(text)
}

/// Chi-squared likeness scorer bound to a reference distribution.
#[derive(Debug, Clone, Copy)]
pub struct ChiSquaredScorer {
    pub reference: FrequencyDistribution,
}

impl ChiSquaredScorer {
    pub fn new(reference: FrequencyDistribution) -> Self {
        Self { reference }
    }

    pub fn english() -> Self {
        Self::new(ENGLISH)
    }

    pub fn chi_squared(&self, text: &str) -> f64 {
        chi_squared_against(&self.reference, text)
    }

    /// Negated chi-squared, suitable as an attack `score_fn`.
    pub fn score(&self, text: &str) -> f64 {
        -self.chi_squared(text)
    }
}

impl Default for ChiSquaredScorer {
    fn default() -> Self {
        Self::english()
    }
}
