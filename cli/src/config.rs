use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use minefield_core::{CellCount, Coord, FieldConfig};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a minefield and print it", long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start from a standard field size
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Number of rows
    #[arg(long)]
    pub height: Option<Coord>,

    /// Number of columns
    #[arg(long)]
    pub width: Option<Coord>,

    /// Number of mines, clamped to the number of cells
    #[arg(short, long)]
    pub mines: Option<u64>,

    /// TOML file with defaults, overridden by any flag given
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Beginner,
    Intermediate,
    Expert,
    Classic,
}

impl From<Preset> for FieldConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => FieldConfig::beginner(),
            Preset::Intermediate => FieldConfig::intermediate(),
            Preset::Expert => FieldConfig::expert(),
            Preset::Classic => FieldConfig::classic(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Contents of a `--config` file, every key optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub preset: Option<Preset>,
    pub height: Option<Coord>,
    pub width: Option<Coord>,
    pub mines: Option<u64>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Counts above [`CellCount::MAX`] exceed any field's capacity, placement clamps them further.
fn saturate_mines(mines: u64) -> CellCount {
    CellCount::try_from(mines).unwrap_or(CellCount::MAX)
}

/// Everything needed for one generation run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    pub field: FieldConfig,
    pub seed: Option<u64>,
}

impl Settings {
    /// Flags win over the file, the file wins over the preset, and the classic field fills in the rest.
    pub fn resolve(args: &Args, file: &FileConfig) -> anyhow::Result<Self> {
        let base: FieldConfig = args
            .preset
            .or(file.preset)
            .unwrap_or(Preset::Classic)
            .into();

        let height = args
            .height
            .or(file.height)
            .unwrap_or(base.dimensions.height());
        let width = args
            .width
            .or(file.width)
            .unwrap_or(base.dimensions.width());
        let mines = args
            .mines
            .or(file.mines)
            .map_or(base.mines, saturate_mines);

        let field = FieldConfig::new(height, width, mines).context("Invalid field size")?;
        Ok(Self {
            field,
            seed: args.seed.or(file.seed),
        })
    }
}
