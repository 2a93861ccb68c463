use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use pvat::config::{AppConfig, ConfigError};
use pvat::format::{self, FormatError};
use pvat::scene::{RetainedScene, SceneError};
use pvat::session::{self, SessionScript};
use pvat::PolygonManager;

/// Polygon annotation editor core, driven from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file (default: pvat-config.json in the platform config directory)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a scripted editing session and export the result
    Replay {
        /// Session script (JSON)
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Annotations to load before replaying
        #[arg(short = 'i', long = "input", value_name = "FILE")]
        input: Option<PathBuf>,

        /// Where to write the exported annotations (default: stdout)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Load an annotation file and summarize it per category
    Inspect {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the default configuration
    Config {
        /// Write it to the platform config path instead
        #[arg(long = "write-default")]
        write_default: bool,
    },
}

/// Errors reported by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Annotation file error: {0}")]
    Format(#[from] FormatError),

    #[error("Camera error: {0}")]
    Scene(#[from] SceneError),
}

/// Load the configuration named on the command line, or the default one.
///
/// A default config file that fails to load is replaced by the built-in
/// defaults. Its error comes back as the second value so it can be reported
/// once logging is initialized.
pub fn load_config(path: Option<&Path>) -> Result<(AppConfig, Option<ConfigError>), ConfigError> {
    match path {
        Some(path) => Ok((AppConfig::load(path)?, None)),
        None => Ok(or_defaults(AppConfig::load_from_default_path())),
    }
}

fn or_defaults(loaded: Result<Option<AppConfig>, ConfigError>) -> (AppConfig, Option<ConfigError>) {
    match loaded {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

pub fn run(command: Command, config: &AppConfig) -> Result<(), CliError> {
    match command {
        Command::Replay {
            script,
            input,
            output,
        } => replay(&script, input.as_deref(), output.as_deref(), config),
        Command::Inspect { file } => inspect(&file, config),
        Command::Config { write_default } => write_config(write_default),
    }
}

fn replay(
    script: &Path,
    input: Option<&Path>,
    output: Option<&Path>,
    config: &AppConfig,
) -> Result<(), CliError> {
    let script = SessionScript::load(script)?;
    let camera = config.camera.build(script.viewport.aspect_ratio())?;
    let mut manager = PolygonManager::from_config(RetainedScene::new(), config);

    if let Some(input) = input {
        let decoded = format::read_document(input)?;
        let summary = manager.load_document(&decoded);
        for warning in &summary.warnings {
            log::warn!("{:?}: {}", input, warning);
        }
    }

    session::replay(&mut manager, &script, &camera, &config.keybindings);
    if let Some(current) = manager.current() {
        log::warn!(
            "Session ended while polygon {} was still being drawn; it is not exported",
            current
        );
    }

    let document = manager.get_annotations();
    match output {
        Some(path) => {
            format::write_document(path, &document)?;
        }
        None => println!("{}", format::encode_document(&document)?),
    }

    log::info!("Scene: {}", manager.surface().summary());
    Ok(())
}

fn inspect(file: &Path, config: &AppConfig) -> Result<(), CliError> {
    let decoded = format::read_document(file)?;
    let mut manager = PolygonManager::from_config(RetainedScene::new(), config);
    let summary = manager.load_document(&decoded);

    println!(
        "{}: {} records ({} polygon records), {} polygons loaded, {} other shapes ignored",
        file.display(),
        decoded.document.len() + decoded.warnings.len(),
        decoded.document.polygons().count(),
        summary.loaded,
        summary.ignored
    );

    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for polygon in manager.polygons() {
        *counts.entry(polygon.category_id()).or_default() += 1;
    }
    for category in manager.categories() {
        let count = counts.remove(&category.id).unwrap_or(0);
        println!(
            "  {:>8}  {:<16} #{:06x}  {}",
            category.id,
            category.name,
            category.rgb24(),
            count
        );
    }
    for (category_id, count) in counts {
        println!("  {:>8}  {:<16} {:>7}  {}", category_id, "(unknown)", "", count);
    }

    if !summary.warnings.is_empty() {
        println!("{} warnings:", summary.warnings.len());
        for warning in &summary.warnings {
            println!("  {}", warning);
        }
    }
    Ok(())
}

fn write_config(write_default: bool) -> Result<(), CliError> {
    let config = AppConfig::default();
    if write_default {
        let path = config.save_to_default_path()?;
        println!("Wrote default configuration to {}", path.display());
    } else {
        println!("{}", config.to_json().map_err(ConfigError::from)?);
    }
    Ok(())
}
