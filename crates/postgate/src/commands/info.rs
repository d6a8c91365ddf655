//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use postgate_core::channel::{Channel, ValidationThresholds};
use postgate_core::config::{Config, ConfigSources};
use postgate_core::{ChannelThresholds, vocabulary::MergeMode};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ThresholdInfo {
    channel: Channel,
    #[serde(flatten)]
    thresholds: ValidationThresholds,
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    suggest_min_length: usize,
    debounce_ms: u128,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    thresholds: Vec<ThresholdInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vocabulary_mode: Option<MergeMode>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        // Invalid overrides surface when the classifier is built; show defaults here.
        let resolved = ChannelThresholds::with_overrides(&config.thresholds).unwrap_or_default();
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config.input_limit(),
            suggest_min_length: config.suggest_min_length,
            debounce_ms: config.debounce().as_millis(),
            thresholds: Channel::ALL
                .into_iter()
                .map(|channel| ThresholdInfo {
                    channel,
                    thresholds: resolved.get(channel),
                })
                .collect(),
            vocabulary_mode: (!config.vocabulary.is_empty()).then_some(config.vocabulary.mode),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources);
    let full_info = FullInfo {
        package: info,
        config: config_info,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }
    if !full_info.package.repository.is_empty() {
        println!(
            "{}: {}",
            "Repository".dimmed(),
            full_info.package.repository.cyan()
        );
    }

    // Configuration section
    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match cfg.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    match cfg.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }
    println!("{}: {}", "Suggest after".dimmed(), cfg.suggest_min_length);
    println!("{}: {} ms", "Debounce".dimmed(), cfg.debounce_ms);
    if let Some(mode) = cfg.vocabulary_mode {
        println!("{}: {mode:?}", "Custom vocabulary".dimmed());
    }

    // Channel length bands
    println!();
    println!("{}", "Channels".bold().underline());
    for t in &cfg.thresholds {
        println!(
            "{}: {}–{} chars",
            t.channel.as_str().dimmed(),
            t.thresholds.min_length,
            t.thresholds.max_length
        );
    }

    Ok(())
}
