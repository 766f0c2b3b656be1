use clap::Parser;
use labextract_core::cli::{read_input, Cli, OutputFormat};
use labextract_core::{LabExtractor, LabReport, PiiRedactor, TextReport};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let raw_text = match read_input(&cli.file) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read {}: {}", cli.file.display(), e);
            eprintln!("Error: Failed to read {}: {}", cli.file.display(), e);
            process::exit(1);
        }
    };

    info!("Read {} lines", raw_text.lines().count());

    let redacted_text = PiiRedactor::standard().redact(&raw_text);

    if cli.redact_only {
        output_redacted(&redacted_text, cli.format);
        return;
    }

    let config = cli.extractor_config();
    info!("Using extractor config: {:?}", config);

    let measurements = LabExtractor::standard().extract_with(&redacted_text, config);
    let report = LabReport {
        redacted_text,
        measurements,
    };

    output_report(&report, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn output_redacted(redacted_text: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", redacted_text),
        OutputFormat::Json => {
            let value = serde_json::json!({ "redacted_text": redacted_text });
            print_json(&value);
        }
    }
}

fn output_report(report: &LabReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", TextReport::new(report)),
        OutputFormat::Json => print_json(report),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: Failed to serialize JSON: {}", e);
            process::exit(1);
        }
    }
}
