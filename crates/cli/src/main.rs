use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod check;
mod commands;
mod convert;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "globals", version = "0.1.0", about = "Rule file globals converter")]
struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse { file, output } => {
            output::emit(&convert::parse_file(&file)?, output.as_deref())?;
        }
        Commands::Render { file, output } => {
            output::emit(&convert::render_file(&file)?, output.as_deref())?;
        }
        Commands::Check { file } => {
            let source = std::fs::read_to_string(&file)?;
            let problems = check::check(&source)?;
            for problem in &problems {
                println!("{file}:{problem}");
            }
            if !problems.is_empty() {
                return Err(CliError::CheckFailed(problems.len()));
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
