use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use mavgen_compiler::{fetcher_for, generate, MavgenError};

#[derive(Parser)]
#[command(name = "mavgen")]
#[command(about = "Generate a Mavlink dialect library from a definition file.")]
#[command(
    after_help = "Example: mavgen --output=dialect.rs https://raw.githubusercontent.com/mavlink/mavlink/master/message_definitions/v1.0/common.xml"
)]
struct Cli {
    /// Output `.rs` file
    #[arg(short, long)]
    output: PathBuf,

    /// A path or url pointing to a Mavlink dialect definition in XML format
    xml: String,

    /// HTTP request timeout in seconds (no timeout if omitted)
    #[arg(long)]
    timeout: Option<u64>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: &Cli) -> Result<(), MavgenError> {
    let fetcher = fetcher_for(&cli.xml, cli.timeout.map(Duration::from_secs))?;
    let report = generate(&cli.output, &cli.xml, fetcher)?;
    tracing::info!(
        "generated {} messages and {} enums from {} definitions",
        report.messages,
        report.enums,
        report.definitions
    );
    Ok(())
}

fn error_line(e: &MavgenError) -> String {
    format!("Error: {}", e)
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.quiet { tracing::Level::WARN } else { tracing::Level::INFO })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{}", error_line(&e));
        process::exit(1);
    }
}
