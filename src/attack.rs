use crate::cipher::decode;
use crate::consts::ALPHABET_SIZE;
use crate::scorer::english_score;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// A hypothesised key and the plaintext it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub shift: u8,
    pub text: String,
}

/// A candidate together with its likeness score (higher is better).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub shift: u8,
    pub text: String,
    pub score: f64,
}

fn all_shifts() -> std::ops::Range<u8> {
    0..ALPHABET_SIZE as u8
}

/// Decodes `ciphertext` under every shift, in ascending shift order.
pub fn brute_force(ciphertext: &str) -> Vec<Candidate> {
    all_shifts()
        .map(|shift| Candidate {
            shift,
            text: decode(ciphertext, shift as i64),
        })
        .collect()
}

/// Returns the candidate with the strictly greatest score. Ties keep the
/// lowest shift. `None` when no candidate scores above `-inf`, i.e. the
/// ciphertext has nothing the scorer can rate.
pub fn frequency_attack<F>(ciphertext: &str, score_fn: F) -> Option<Candidate>
where
    F: Fn(&str) -> f64,
{
    let mut best_score = f64::NEG_INFINITY;
    let mut best: Option<Candidate> = None;

    for shift in all_shifts() {
        let text = decode(ciphertext, shift as i64);
        let score = score_fn(&text);
        if score > best_score {
            best_score = score;
            best = Some(Candidate { shift, text });
        }
    }

    match &best {
        Some(c) => debug!("Best shift {} (score {:.3})", c.shift, best_score),
        None => debug!("No scoreable candidate for {} chars", ciphertext.len()),
    }
    best
}

/// Scores all 26 shifts with the English chi-squared scorer and keeps the top `top_n`.
pub fn ranked_candidates(ciphertext: &str, top_n: usize) -> Vec<ScoredCandidate> {
    ranked_candidates_with(ciphertext, top_n, english_score)
}

/// Same as [`ranked_candidates`] with a caller-supplied scorer.
pub fn ranked_candidates_with<F>(
    ciphertext: &str,
    top_n: usize,
    score_fn: F,
) -> Vec<ScoredCandidate>
where
    F: Fn(&str) -> f64 + Sync,
{
    if top_n == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredCandidate> = all_shifts()
        .into_par_iter()
        .map(|shift| {
            let text = decode(ciphertext, shift as i64);
            let score = score_fn(&text);
            ScoredCandidate { shift, text, score }
        })
        .collect();

    scored.sort_by(rank_order);
    scored.truncate(top_n);
    scored
}

/// Descending score, ascending shift on ties.
pub fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    rank_key(b.score)
        .total_cmp(&rank_key(a.score))
        .then(a.shift.cmp(&b.shift))
}

// NaN ranks with -inf; -0.0 and 0.0 tie.
fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score + 0.0
    }
}
