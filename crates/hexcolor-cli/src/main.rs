mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "hexcolor=warn";

fn init_logging(directive: Option<&str>) {
    let directive = directive
        .and_then(|d| d.parse::<Directive>().ok())
        .or_else(|| DEFAULT_LOG_DIRECTIVE.parse().ok());

    let mut filter = EnvFilter::from_default_env();
    if let Some(directive) = directive {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::debug!(version = hexcolor::VERSION, command = ?args.command, "running");

    match commands::run(&args.command, args.json) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
