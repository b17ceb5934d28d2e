use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, bail};
use clap::Parser;
use jsonify_core::{
    ConversionFacade, ConvertConfig, Format, StringStyle, labelled, prettify, read_file, read_stdin,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert XML, CSV and HTML content into JSON-like output
#[derive(Parser, Debug)]
#[command(name = "jsonify")]
#[command(author = "jsonify Contributors")]
#[command(version)]
#[command(about = "Convert XML, CSV and HTML content into JSON", long_about = None)]
struct Args {
    /// Input file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Input format (xml, csv, html); detected from the file extension if omitted
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print converter output without the "Result of ... conversion" label
    #[arg(long)]
    raw: bool,

    /// Escape quotes, backslashes and control characters in keys and values
    #[arg(long)]
    escape: bool,

    /// Pretty-print the JSON (fails if the output is not valid JSON)
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Pick the converter from `--format`, falling back to the input's extension
fn resolve_format(args: &Args) -> anyhow::Result<Format> {
    match &args.format {
        Some(tag) => Ok(tag.parse::<Format>()?),
        None if args.input == "-" => bail!("--format is required when reading from stdin"),
        None => Format::from_path(&args.input).context("Use --format to choose a converter"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let started = Instant::now();

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let format = resolve_format(&args)?;

    let content = if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 3, "Reading from stdin");
        }
        read_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            echo::print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        read_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if args.verbose {
        echo::print_detail("Size", &echo::format_size(content.len()));
        echo::print_detail("Format", format.label());
        eprintln!();
        echo::print_step(2, 3, &format!("Converting {} to JSON", format.label()));
    }

    let style = if args.escape { StringStyle::Escaped } else { StringStyle::Verbatim };
    let config = ConvertConfig::builder().string_style(style).include_label(false).build();
    let facade = ConversionFacade::with_config(config);

    let mut json = facade.convert_raw(&content, format);
    if json.is_empty() {
        tracing::warn!(format = format.tag(), "conversion produced no output");
    }

    if args.pretty {
        json = prettify(&json).context("Failed to pretty-print output")?;
    }

    let output = if args.raw { json } else { labelled(format, &json) };

    if args.verbose {
        eprintln!();
        echo::print_step(3, 3, "Writing output");
        echo::print_detail("Label", if args.raw { "No" } else { "Yes" });
        echo::print_detail("Escaped", if args.escape { "Yes" } else { "No" });
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", output))
                .with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    if args.verbose {
        echo::print_timing("Total", started.elapsed());
    }

    Ok(())
}
