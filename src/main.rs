use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use assertkit::Result;
use assertkit::cli::{Args, OutputFormat};
use assertkit::format::format_labeled_texts;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    args.validate()?;

    let config = args.config();
    let texts = args.labeled_texts(&config)?;

    match args.format {
        OutputFormat::Text => {
            println!("{}", format_labeled_texts(&texts, config.enable_color));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&texts).unwrap_or_else(|_| "[]".to_string())
            );
        }
    }

    Ok(())
}
