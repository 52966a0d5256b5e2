use clap::Parser;
use folio::{ConvertError, ConverterConfig, DocumentConverter};
use std::fs;
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Renders a JSON document tree into a PDF file.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Args {
    /// JSON array of top-level document nodes
    input: PathBuf,

    /// Where to write the PDF
    output: PathBuf,

    /// TOML or JSON file with page, layout and font settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), ConvertError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConverterConfig::from_file(path)?,
        None => ConverterConfig::from_env()?,
    };

    log::info!("Reading document from {}", args.input.display());
    let json = fs::read(&args.input)?;
    let pdf = DocumentConverter::new(config).convert_json(&json)?;

    fs::write(&args.output, &pdf)?;
    log::info!("Wrote {} bytes to {}", pdf.len(), args.output.display());
    Ok(())
}
