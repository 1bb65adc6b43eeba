use crate::cipher::parse_shift;
use crate::consts::{DEFAULT_SHIFT, DEFAULT_TOP_N};
use crate::error::SbResult;
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackParams {
    /// Number of ranked guesses to report
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// CSV `Letter,Frequency` table replacing the English reference
    #[arg(long)]
    pub reference: Option<String>,

    /// Skip the 26-line brute-force listing
    #[arg(long = "no-brute-force", action = clap::ArgAction::SetFalse, default_value_t = true)]
    pub brute_force: bool,
}

impl Default for AttackParams {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            reference: None,
            brute_force: true,
        }
    }
}

impl AttackParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SbResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over every field the user typed explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &AttackParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(top_n, "top_n");
        update_if_present!(reference, "reference");
        update_if_present!(brute_force, "brute_force");
    }
}

#[derive(Args, Debug, Clone)]
pub struct ShiftParams {
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SHIFT,
        allow_negative_numbers = true,
        value_parser = parse_shift
    )]
    pub shift: i64,

    /// Reject shifts outside 0..=25 instead of wrapping them
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

impl Default for ShiftParams {
    fn default() -> Self {
        Self {
            shift: DEFAULT_SHIFT,
            strict: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutputParams {
    #[arg(long, default_value = "output.txt")]
    pub output_file: String,

    #[arg(long, default_value = ".")]
    pub output_dir: String,
}

impl Default for OutputParams {
    fn default() -> Self {
        Self {
            output_file: "output.txt".to_string(),
            output_dir: ".".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: AttackParams = serde_json::from_str(r#"{"top_n": 3}"#).unwrap();
        assert_eq!(params.top_n, 3);
        assert!(params.brute_force);
        assert!(params.reference.is_none());
    }
}
