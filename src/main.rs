//! Filter Presets - CLI for rendering video filter presets
//!
//! Lists the built-in presets or renders one preset, with optional parameter
//! overrides, into an mpv `--vf` filter string. Output is reported via JSON
//! messages on stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use filter_presets::models::{LogLevel, ParameterSummary, PresetJob, PresetSummary};
use filter_presets::reporter::Reporter;
use filter_presets::{Localization, PresetCatalog};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "filter-presets")]
#[command(about = "Render video filter presets to mpv filter strings")]
#[command(version)]
struct Args {
    /// Path to a JSON localization table for display names
    #[arg(long, global = true)]
    l10n: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in presets and their parameters
    List,

    /// Render a preset to a filter string
    Render {
        /// Preset name (may also come from --config)
        preset: Option<String>,

        /// Path to a JSON job file with preset name and parameter values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Parameter override as name=value, applied after --config
        #[arg(long = "set", value_name = "NAME=VALUE")]
        assignments: Vec<String>,

        /// mpv filter label
        #[arg(long)]
        label: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let reporter = Reporter::new();

    if let Some(path) = &args.l10n {
        install_localization(path, &reporter);
    }

    let result = match &args.command {
        Command::List => run_list(&reporter),
        Command::Render {
            preset,
            config,
            assignments,
            label,
        } => run_render(
            preset.as_deref(),
            config.as_deref(),
            assignments,
            label.as_deref(),
            &reporter,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.send_error(&format!("{:#}", e));
            ExitCode::from(1)
        }
    }
}

/// Load an explicit localization table. Failure leaves display names untranslated.
fn install_localization(path: &Path, reporter: &Reporter) {
    match Localization::load_from_file(path) {
        Ok(table) => {
            reporter.send_log(
                LogLevel::Debug,
                &format!("Loaded {} localization entries", table.len()),
            );
            Localization::install(table);
        }
        Err(e) => {
            reporter.send_log(LogLevel::Warning, &format!("{:#}", e));
            Localization::install(Localization::empty());
        }
    }
}

fn run_list(reporter: &Reporter) -> Result<()> {
    let presets = PresetCatalog::global()
        .presets()
        .iter()
        .map(|preset| PresetSummary {
            name: preset.name().to_string(),
            localized_name: preset.localized_name().to_string(),
            param_order: preset.param_order().map(<[String]>::to_vec),
            params: preset
                .ordered_param_names()
                .into_iter()
                .filter_map(|name| {
                    preset.param(name).map(|spec| ParameterSummary {
                        name: name.to_string(),
                        localized_name: preset.localized_param_name(name),
                        spec: spec.clone(),
                    })
                })
                .collect(),
        })
        .collect();

    reporter.send_presets(presets);
    Ok(())
}

fn run_render(
    preset_name: Option<&str>,
    config: Option<&Path>,
    assignments: &[String],
    label: Option<&str>,
    reporter: &Reporter,
) -> Result<()> {
    let job = match config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let job: PresetJob = serde_json::from_str(&content)
                .with_context(|| "Failed to parse job configuration")?;
            Some(job)
        }
        None => None,
    };

    let name = preset_name
        .or(job.as_ref().map(|j| j.preset.as_str()))
        .context("No preset given; pass a preset name or --config")?;

    let preset = PresetCatalog::global().require(name)?;
    let mut instance = preset.instance();

    if let Some(job) = &job {
        for (param, value) in &job.params {
            instance.set_from_str(param, &value.string_value())?;
        }
    }
    for assignment in assignments {
        instance.assign(assignment)?;
    }

    for param in instance.out_of_range() {
        reporter.send_log(
            LogLevel::Warning,
            &format!(
                "{} = {} is outside the range of {}",
                param,
                instance.value(param),
                preset.name()
            ),
        );
    }

    let label = label.or(job.as_ref().and_then(|j| j.label.as_deref()));
    let filter = instance.apply().with_label(label);

    reporter.send_log(
        LogLevel::Debug,
        &format!(
            "Rendered {} with {} overrides",
            preset.name(),
            instance.overrides().len()
        ),
    );
    reporter.send_filter(preset.name(), &filter.to_string());
    Ok(())
}
