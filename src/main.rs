use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use helpcenter_extract::{
    derive_url, parse_base_url, process_directory, scan_directory, ExtractOptions,
};

#[derive(Parser)]
#[command(
    name = "helpcenter-extract",
    about = "Extract article records from saved help-center pages"
)]
struct Cli {
    /// JSON options file (base_url, target_file_name, content_class, deny_list, date_formats)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the site base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every saved page under ROOT as JSON Lines
    Extract {
        root: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List saved pages under ROOT
    Scan { root: PathBuf },
    /// Print the public URL of a flattened page path
    Url { path: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = load_options(cli.config.as_deref(), cli.base_url.as_deref())?;

    match cli.command {
        Commands::Extract { root, output } => {
            let t0 = Instant::now();
            let report = process_directory(&root, &options)
                .with_context(|| format!("failed to process {}", root.display()))?;

            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?,
                )),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            for record in report.records() {
                serde_json::to_writer(&mut out, record)?;
                out.write_all(b"\n")?;
            }
            out.flush()?;

            eprintln!(
                "Done: {} records, {} structural failures, {} field failures in {:.1}s",
                report.record_count(),
                report.structural_failures(),
                report.field_failures(),
                t0.elapsed().as_secs_f64()
            );
        }
        Commands::Scan { root } => {
            for path in scan_directory(&root, &options.target_file_name)? {
                println!("{}", path.display());
            }
        }
        Commands::Url { path } => {
            println!("{}", derive_url(&path, &options.base_url)?);
        }
    }

    Ok(())
}

fn load_options(config: Option<&Path>, base_url: Option<&str>) -> anyhow::Result<ExtractOptions> {
    let mut options = match config {
        Some(path) => ExtractOptions::from_json_file(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => ExtractOptions::default(),
    };
    if let Some(url) = base_url {
        options.base_url = parse_base_url(url)?;
    }
    Ok(options)
}
