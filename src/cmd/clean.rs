use clap::Args;
use shiftbreak::error::SbResult;
use shiftbreak::text::clean_file;
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    pub input_file: String,

    #[arg(long, default_value = "processed_output.txt")]
    pub output_file: String,

    #[arg(long, default_value = ".")]
    pub output_dir: String,
}

pub fn run(args: CleanArgs) -> SbResult<()> {
    fs::create_dir_all(&args.output_dir)?;
    let target = Path::new(&args.output_dir).join(&args.output_file);
    let path = clean_file(&args.input_file, target)?;
    println!("Processed file saved to: {}", path.display());
    Ok(())
}
