use super::InputArgs;
use crate::reports;
use clap::{ArgMatches, Args};
use shiftbreak::api::crack;
use shiftbreak::config::AttackParams;
use shiftbreak::error::SbResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub attack: AttackParams,

    /// Emit the full report as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CrackArgs, config_path: Option<&str>, matches: &ArgMatches) -> SbResult<()> {
    let params = match config_path {
        Some(path) => {
            info!("⚙️  Loading attack config from: {}", path);
            let mut file_params = AttackParams::load_from_file(path)?;
            file_params.merge_from_cli(&args.attack, matches);
            file_params
        }
        None => args.attack.clone(),
    };

    let ciphertext = args.input.read()?;
    let report = crack(&ciphertext, &params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !report.brute_force.is_empty() {
        reports::print_brute_force(&report.brute_force);
    }
    reports::print_ranked(&report.ranked);
    reports::print_best(report.best.as_ref());
    Ok(())
}
