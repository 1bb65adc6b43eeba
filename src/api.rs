use crate::attack::{
    brute_force, frequency_attack, ranked_candidates_with, Candidate, ScoredCandidate,
};
use crate::cipher::{encode, validate_shift};
use crate::config::{AttackParams, ShiftParams};
use crate::error::{SbResult, ShiftBreakError};
use crate::loader::load_reference_from_file;
use crate::scorer::ChiSquaredScorer;
use crate::text::clean_text;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CipherKind {
    Caesar,
}

impl CipherKind {
    pub fn parse(name: &str) -> SbResult<Self> {
        Self::from_str(name.trim())
            .map_err(|_| ShiftBreakError::UnsupportedCipher(name.to_string()))
    }

    pub fn supported_names() -> Vec<String> {
        Self::iter().map(|k| k.to_string()).collect()
    }
}

/// Everything a full attack on one ciphertext produced.
#[derive(Debug, Clone, Serialize)]
pub struct CrackReport {
    pub ciphertext: String,
    pub best: Option<Candidate>,
    pub ranked: Vec<ScoredCandidate>,
    pub brute_force: Vec<Candidate>,
}

/// Builds the scorer an attack should use: English, or the configured CSV table.
pub fn resolve_scorer(params: &AttackParams) -> SbResult<ChiSquaredScorer> {
    match &params.reference {
        Some(path) => {
            info!("📊 Loading reference frequencies from: {}", path);
            Ok(ChiSquaredScorer::new(load_reference_from_file(path)?))
        }
        None => Ok(ChiSquaredScorer::english()),
    }
}

/// Runs the frequency attack, the ranked attack and (optionally) brute force.
pub fn crack(ciphertext: &str, params: &AttackParams) -> SbResult<CrackReport> {
    let scorer = resolve_scorer(params)?;
    let score_fn = |t: &str| scorer.score(t);

    let best = frequency_attack(ciphertext, score_fn);
    if best.is_none() {
        warn!("Ciphertext has no letters to score; frequency attack has no winner");
    }

    let ranked = ranked_candidates_with(ciphertext, params.top_n, score_fn);
    let listing = if params.brute_force {
        brute_force(ciphertext)
    } else {
        Vec::new()
    };

    Ok(CrackReport {
        ciphertext: ciphertext.to_string(),
        best,
        ranked,
        brute_force: listing,
    })
}

/// Applies the shift policy: strict mode rejects non-canonical shifts.
pub fn checked_shift(params: &ShiftParams) -> SbResult<i64> {
    if params.strict {
        validate_shift(params.shift)?;
    }
    Ok(params.shift)
}

#[derive(Debug, Clone)]
pub struct DemoRequest {
    pub cipher: String,
    pub shift: ShiftParams,
    pub attack: Option<AttackParams>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub plaintext: String,
    pub ciphertext: String,
    pub shift: i64,
    pub attack: Option<CrackReport>,
}

/// Clean, encrypt, and optionally attack `raw_text`.
pub fn run_demo(raw_text: &str, req: &DemoRequest) -> SbResult<DemoReport> {
    CipherKind::parse(&req.cipher)?;
    let shift = checked_shift(&req.shift)?;

    let plaintext = clean_text(raw_text.trim());
    let ciphertext = encode(&plaintext, shift);
    info!("🔐 Encrypted {} chars with shift {}", ciphertext.len(), shift);

    let attack = match &req.attack {
        Some(params) => Some(crack(&ciphertext, params)?),
        None => None,
    };

    Ok(DemoReport {
        plaintext,
        ciphertext,
        shift,
        attack,
    })
}

/// Plain-text rendering used for the demo output file.
pub fn render_demo(report: &DemoReport) -> String {
    let mut lines: Vec<String> = vec![
        "=== ENCRYPTED MESSAGE ===".to_string(),
        report.ciphertext.clone(),
        String::new(),
    ];

    if let Some(attack) = &report.attack {
        if !attack.brute_force.is_empty() {
            lines.push("=== BRUTE FORCE ATTACK RESULTS ===".to_string());
            for c in &attack.brute_force {
                lines.push(format!("Shift {:2}: {}", c.shift, c.text));
                lines.push(String::new());
            }
        }

        lines.push(format!(
            "=== TOP {} FREQUENCY ANALYSIS GUESSES ===",
            attack.ranked.len()
        ));
        for c in &attack.ranked {
            lines.push(format!(
                "Shift {:2} | Score {:8.2} | {}",
                c.shift, c.score, c.text
            ));
        }
    }

    lines.join("\n")
}

/// Creates `dir` if needed and writes `contents` to `dir/file`.
pub fn write_report<P: AsRef<Path>>(dir: P, file: &str, contents: &str) -> SbResult<PathBuf> {
    fs::create_dir_all(dir.as_ref())?;
    let path = dir.as_ref().join(file);
    fs::write(&path, contents)?;
    Ok(path)
}
