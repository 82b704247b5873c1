use clap::Parser;
use minefield_core::{Field, FieldConfig};
use serde::Serialize;

use config::{Args, FileConfig, Format, Settings};

mod config;

#[derive(Serialize)]
struct Output<'a> {
    seed: u64,
    config: FieldConfig,
    field: &'a Field,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(std::io::stderr)
        .init();

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&args, &file)?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let config = settings.field;
    let field = Field::with_seed(config, seed)?;
    log::info!(
        "Generated {}x{} field with {} mines",
        config.dimensions.height(),
        config.dimensions.width(),
        field.mine_count()
    );

    match args.format {
        Format::Text => print!("{field}"),
        Format::Json => {
            let output = Output {
                seed,
                config,
                field: &field,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
