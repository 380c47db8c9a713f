use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use addon_release::cli::orchestration::{self, StageWorkflowArgs, TagCheck};
use addon_release::config::{self, Config};
use addon_release::domain::ReleaseStage;
use addon_release::git::Git2Repository;
use addon_release::output;
use addon_release::ui;

#[derive(Parser)]
#[command(
    name = "addon-release",
    version,
    about = "Resolve the addon version and stage it for packaging and release"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the version declared in the source file and emit it as a step output
    Resolve {
        #[arg(short, long, help = "Source file holding the version declaration")]
        source: Option<PathBuf>,

        #[arg(short, long, help = "Step output file (defaults to $GITHUB_OUTPUT, then stdout)")]
        output: Option<PathBuf>,

        #[arg(short, long, help = "Only emit the output line")]
        quiet: bool,
    },

    /// Resolve the version and emit every input the build and release actions need
    Stage {
        #[arg(short, long, help = "Source file holding the version declaration")]
        source: Option<PathBuf>,

        #[arg(short, long, help = "Step output file (defaults to $GITHUB_OUTPUT, then stdout)")]
        output: Option<PathBuf>,

        #[arg(long, value_parser = ReleaseStage::parse, help = "Release stage: alpha, beta, rc or gold")]
        stage: Option<ReleaseStage>,

        #[arg(long, default_value = ".", help = "Repository used for the release tag check")]
        repo: PathBuf,

        #[arg(long, help = "Skip checking whether the release tag already exists")]
        no_tag_check: bool,
    },

    /// Compare the declared version with another version
    Compare {
        #[arg(short, long, help = "Source file holding the version declaration")]
        source: Option<PathBuf>,

        #[arg(long, help = "Version to compare against (e.g. v1.0.3)")]
        against: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Resolve {
            source,
            output,
            quiet,
        } => resolve(&config, source, output, quiet),
        Command::Stage {
            source,
            output,
            stage,
            repo,
            no_tag_check,
        } => stage_release(&config, source, output, stage, &repo, no_tag_check),
        Command::Compare { source, against } => compare(&config, source, &against),
    }
}

fn source_path(config: &Config, source: Option<PathBuf>) -> PathBuf {
    source.unwrap_or_else(|| config.source.path.clone())
}

fn resolve(
    config: &Config,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let source = source_path(config, source);
    let output = output.or_else(|| config.output.path.clone());
    let mut sink = output::sink_from_env(output.as_deref());

    let outcome = match orchestration::run_resolve_workflow(&source, sink.as_mut()) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&format!("{} ({})", e, source.display()));
            std::process::exit(1);
        }
    };

    for warning in &outcome.warnings {
        ui::display_boundary_warning(warning);
    }
    if !quiet {
        ui::display_resolution(&outcome.resolution, &source);
    }

    Ok(())
}

fn stage_release(
    config: &Config,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    stage: Option<ReleaseStage>,
    repo_path: &Path,
    no_tag_check: bool,
) -> Result<()> {
    let stage = match stage {
        Some(stage) => stage,
        None => {
            let default = match config.release.default_stage() {
                Ok(stage) => stage,
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(1);
                }
            };
            if ui::is_interactive() {
                ui::select_stage(default)?
            } else {
                default
            }
        }
    };

    let args = StageWorkflowArgs {
        source: source_path(config, source),
        stage,
    };

    let repo = if no_tag_check {
        None
    } else {
        Git2Repository::open(repo_path).ok()
    };
    let tag_check = match (&repo, no_tag_check) {
        (_, true) => TagCheck::Skip,
        (Some(repo), false) => TagCheck::Repo(repo),
        (None, false) => TagCheck::Unavailable(repo_path.to_path_buf()),
    };

    let output = output.or_else(|| config.output.path.clone());
    let mut sink = output::sink_from_env(output.as_deref());

    ui::display_status(&format!(
        "Staging {} release from {}",
        stage,
        args.source.display()
    ));

    let outcome = match orchestration::run_stage_workflow(&args, config, tag_check, sink.as_mut())
    {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&format!("{} ({})", e, args.source.display()));
            std::process::exit(1);
        }
    };

    for warning in &outcome.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_resolution(&outcome.resolution, &args.source);
    ui::display_release_plan(&outcome.plan);

    Ok(())
}

fn compare(config: &Config, source: Option<PathBuf>, against: &str) -> Result<()> {
    let source = source_path(config, source);

    let comparison = match orchestration::run_compare_workflow(&source, against) {
        Ok(comparison) => comparison,
        Err(e) => {
            ui::display_error(&format!("{} ({})", e, source.display()));
            std::process::exit(1);
        }
    };

    ui::display_status(&ui::comparison_summary(
        &comparison.current,
        &comparison.other,
    ));

    Ok(())
}
