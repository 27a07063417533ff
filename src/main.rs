use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdfcheck::Harness;
use pdfcheck::cli::{CliConfig, OutputFormat};
use pdfcheck::report;

const EXIT_USAGE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliConfig::parse();
    init_tracing(cli.log_level());

    let harness = match cli.harness_config().and_then(Harness::new) {
        Ok(harness) => harness,
        Err(err) => {
            eprintln!("error: {}", err.chain_message());
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let text = cli.output_format == OutputFormat::Text;
    let stdout = io::stdout();

    if text {
        print_or_warn(report::write_header(&mut stdout.lock(), &harness.config().base_url));
    }
    let run = harness
        .run(|result| {
            if text {
                print_or_warn(report::write_check(&mut stdout.lock(), result));
            }
        })
        .await;

    match cli.output_format {
        OutputFormat::Text => print_or_warn(report::write_footer(&mut stdout.lock(), &run)),
        OutputFormat::Json => match report::to_json(&run) {
            Ok(json) => print_or_warn(writeln!(stdout.lock(), "{json}")),
            Err(err) => {
                eprintln!("error: {}", err.chain_message());
                return ExitCode::from(EXIT_USAGE);
            }
        },
    }

    if let Some(path) = &cli.report_path {
        if let Err(err) = report::write_json_report(&run, path) {
            eprintln!("error: {}", err.chain_message());
            return ExitCode::from(EXIT_USAGE);
        }
    }

    ExitCode::from(run.exit_code())
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pdfcheck={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_or_warn(result: io::Result<()>) {
    if let Err(err) = result {
        tracing::warn!(error = %err, "failed to write to stdout");
    }
}
