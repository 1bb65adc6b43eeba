pub mod clean;
pub mod crack;
pub mod demo;
pub mod transform;

use clap::Args;
use shiftbreak::error::SbResult;
use shiftbreak::text::clean_text;
use std::fs;
use std::io::{self, Read};

/// Where a subcommand reads its text from: `--text`, `--input <file>`, or stdin.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    #[arg(short, long, conflicts_with = "input")]
    pub text: Option<String>,

    #[arg(short, long)]
    pub input: Option<String>,

    /// Uppercase and strip punctuation before processing
    #[arg(long, default_value_t = false)]
    pub clean: bool,
}

impl InputArgs {
    pub fn read(&self) -> SbResult<String> {
        let raw = match (&self.text, &self.input) {
            (Some(t), _) => t.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        let raw = raw.trim_end_matches(['\n', '\r']).to_string();
        Ok(if self.clean { clean_text(&raw) } else { raw })
    }
}
