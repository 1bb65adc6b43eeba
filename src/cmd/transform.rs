use super::InputArgs;
use clap::Args;
use shiftbreak::api::checked_shift;
use shiftbreak::cipher::{decode, encode};
use shiftbreak::config::ShiftParams;
use shiftbreak::error::SbResult;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct TransformArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub shift: ShiftParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

pub fn run(args: TransformArgs, direction: Direction) -> SbResult<()> {
    let shift = checked_shift(&args.shift)?;
    let text = args.input.read()?;
    debug!("{:?} {} chars with shift {}", direction, text.len(), shift);

    let out = match direction {
        Direction::Encrypt => encode(&text, shift),
        Direction::Decrypt => decode(&text, shift),
    };
    println!("{}", out);
    Ok(())
}
