use clap::Parser;
use labextract_core::{AliasDictionary, Normalizer};
use log::debug;
use std::io::BufRead;

/// CLI tool for resolving lab labels to canonical items
#[derive(Parser, Debug)]
#[command(name = "labnorm")]
#[command(about = "Resolve free-form lab labels to canonical items and units")]
#[command(version)]
struct Cli {
    /// Labels to resolve; read one per line from stdin when omitted
    #[arg(value_name = "LABEL")]
    labels: Vec<String>,

    /// Print the alias set of each resolved item
    #[arg(short, long)]
    aliases: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let labels: Vec<String> = if cli.labels.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .map_while(Result::ok)
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        cli.labels.clone()
    };

    debug!("Resolving {} labels", labels.len());

    let normalizer = Normalizer::standard();
    let dictionary = AliasDictionary::standard();

    for label in &labels {
        match normalizer.normalize(label) {
            Some(item) => {
                let unit = dictionary.unit(item);
                println!("{}\t{}\t{}", label, item, if unit.is_empty() { "-" } else { unit });
                if cli.aliases {
                    if let Some(aliases) = dictionary.aliases(item) {
                        println!("\t{}", aliases.join(", "));
                    }
                }
            }
            None => println!("{}\t-\t-", label),
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }
}
