use clap::Args;
use shiftbreak::api::{render_demo, run_demo, write_report, DemoRequest};
use shiftbreak::config::{AttackParams, OutputParams, ShiftParams};
use shiftbreak::error::SbResult;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    pub input_file: String,

    #[command(flatten)]
    pub output: OutputParams,

    #[arg(long, default_value = "caesar")]
    pub cipher: String,

    #[command(flatten)]
    pub shift: ShiftParams,

    /// Performs brute-force and frequency-analysis attacks
    #[arg(long, default_value_t = false)]
    pub attack: bool,

    #[arg(long, default_value_t = shiftbreak::consts::DEFAULT_TOP_N)]
    pub top_n: usize,
}

pub fn run(args: DemoArgs) -> SbResult<()> {
    info!("📂 Reading: {}", args.input_file);
    let raw = fs::read_to_string(&args.input_file)?;

    let req = DemoRequest {
        cipher: args.cipher.clone(),
        shift: args.shift.clone(),
        attack: args.attack.then(|| AttackParams {
            top_n: args.top_n,
            ..AttackParams::default()
        }),
    };

    let report = run_demo(&raw, &req)?;
    let path = write_report(
        &args.output.output_dir,
        &args.output.output_file,
        &render_demo(&report),
    )?;
    println!("Output saved to: {}", path.display());
    Ok(())
}
