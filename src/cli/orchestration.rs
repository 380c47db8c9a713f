//! Workflow orchestration logic
//!
//! Each CLI subcommand maps to one workflow here. Workflows take plain
//! arguments rather than clap types, return what happened, and leave printing
//! to the caller. Nothing is written to the output sink until every check
//! that can fail has passed.

use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{ReleasePlan, ReleaseStage, TagPattern, VersionTuple};
use crate::error::Result;
use crate::git::Repository;
use crate::output::OutputSink;
use crate::resolver::{Resolution, VersionResolver};

/// How the release tag should be checked against a repository
pub enum TagCheck<'a> {
    /// Tag check disabled
    Skip,
    /// Repository could not be opened at the given path
    Unavailable(PathBuf),
    Repo(&'a dyn Repository),
}

/// Result of the resolve workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOutcome {
    pub resolution: Resolution,
    pub warnings: Vec<BoundaryWarning>,
}

/// Arguments for the stage workflow
#[derive(Debug, Clone, PartialEq)]
pub struct StageWorkflowArgs {
    /// File holding the version declaration
    pub source: PathBuf,

    /// Operator-selected release stage
    pub stage: ReleaseStage,
}

/// Result of the stage workflow
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutcome {
    pub resolution: Resolution,
    pub plan: ReleasePlan,
    pub warnings: Vec<BoundaryWarning>,
}

/// Result of the compare workflow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub current: VersionTuple,
    pub other: VersionTuple,
}

impl Comparison {
    pub fn is_newer(&self) -> bool {
        self.current.is_newer_than(&self.other)
    }
}

/// Warnings derived from a resolution alone
pub fn resolution_warnings(resolution: &Resolution) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    if resolution.declarations > 1 {
        warnings.push(BoundaryWarning::MultipleDeclarations {
            count: resolution.declarations,
            chosen: resolution.version,
        });
    }

    if resolution.version.is_zero() {
        warnings.push(BoundaryWarning::ZeroVersion);
    }

    warnings
}

/// Resolve the version in `source` and write `version=X.Y.Z` to the sink.
///
/// On failure nothing is written.
pub fn run_resolve_workflow<S: OutputSink + ?Sized>(
    source: &Path,
    sink: &mut S,
) -> Result<ResolveOutcome> {
    let resolver = VersionResolver::new()?;
    let resolution = resolver.resolve_file(source)?;

    sink.write_output("version", &resolution.version_string)?;

    Ok(ResolveOutcome {
        warnings: resolution_warnings(&resolution),
        resolution,
    })
}

/// Resolve the version, build the release plan, check the tag, and write every
/// plan output to the sink.
///
/// # Returns
///
/// The plan and any boundary warnings, or the first error. On error the sink
/// is left untouched.
pub fn run_stage_workflow<S: OutputSink + ?Sized>(
    args: &StageWorkflowArgs,
    config: &Config,
    tag_check: TagCheck<'_>,
    sink: &mut S,
) -> Result<StageOutcome> {
    let resolver = VersionResolver::new()?;
    let resolution = resolver.resolve_file(&args.source)?;
    let plan = ReleasePlan::from_resolution(&resolution, args.stage, config)?;

    let mut warnings = resolution_warnings(&resolution);

    match tag_check {
        TagCheck::Skip => {}
        TagCheck::Unavailable(path) => {
            warnings.push(BoundaryWarning::NotAGitRepository {
                path: path.display().to_string(),
            });
        }
        TagCheck::Repo(repo) => {
            if repo.tag_exists(&plan.tag)? {
                warnings.push(BoundaryWarning::TagAlreadyExists {
                    tag: plan.tag.clone(),
                });
            }

            let pattern = TagPattern::new(config.release.tag_pattern.as_str())?;
            if let Some((latest_tag, latest)) = pattern.latest_release(&repo.list_tags()?) {
                if latest.is_newer_than(&plan.version) {
                    warnings.push(BoundaryWarning::OlderThanLatestRelease {
                        version: plan.version,
                        latest_tag,
                    });
                }
            }
        }
    }

    sink.write_all(&plan.outputs())?;

    Ok(StageOutcome {
        resolution,
        plan,
        warnings,
    })
}

/// Resolve the version in `source` and compare it with `against`.
///
/// `against` may carry a `v` prefix and pre-release/build metadata; only its
/// numeric core is compared.
pub fn run_compare_workflow(source: &Path, against: &str) -> Result<Comparison> {
    let other = VersionTuple::from_semver_str(against)?;
    let resolution = VersionResolver::new()?.resolve_file(source)?;

    Ok(Comparison {
        current: resolution.version,
        other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;
    use crate::output::{FileSink, MemorySink};
    use std::io::Write;

    fn source_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_resolve_writes_version() {
        let file = source_file("bl_info = {\"version\": (1, 0, 4)}\n");
        let mut sink = MemorySink::new();

        let outcome = run_resolve_workflow(file.path(), &mut sink).unwrap();
        assert_eq!(outcome.resolution.version, VersionTuple::new(1, 0, 4));
        assert!(outcome.warnings.is_empty());
        assert_eq!(sink.entries().len(), 1);
        assert_eq!(sink.get("version"), Some("1.0.4"));
    }

    #[test]
    fn test_resolve_failure_writes_nothing() {
        let file = source_file("version = (1, 2)\n");
        let mut sink = MemorySink::new();

        let err = run_resolve_workflow(file.path(), &mut sink).unwrap_err();
        assert!(err.is_resolution_failure());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_resolve_reports_multiple_declarations() {
        let file = source_file("version = (0, 1, 0)\n\"version\": (0, 2, 0)\n");
        let mut sink = MemorySink::new();

        let outcome = run_resolve_workflow(file.path(), &mut sink).unwrap();
        assert_eq!(sink.get("version"), Some("0.1.0"));
        assert_eq!(
            outcome.warnings,
            vec![BoundaryWarning::MultipleDeclarations {
                count: 2,
                chosen: VersionTuple::new(0, 1, 0),
            }]
        );
    }

    #[test]
    fn test_resolve_reports_zero_version() {
        let file = source_file("version = (0, 0, 0)\n");
        let mut sink = MemorySink::new();

        let outcome = run_resolve_workflow(file.path(), &mut sink).unwrap();
        assert_eq!(outcome.warnings, vec![BoundaryWarning::ZeroVersion]);
    }

    #[test]
    fn test_stage_writes_plan_outputs() {
        let file = source_file("\"version\": (1, 0, 4),\n");
        let args = StageWorkflowArgs {
            source: file.path().to_path_buf(),
            stage: ReleaseStage::Rc,
        };
        let mut sink = MemorySink::new();

        let outcome =
            run_stage_workflow(&args, &Config::default(), TagCheck::Skip, &mut sink).unwrap();

        assert_eq!(outcome.plan.tag, "v1.0.4-rc");
        assert_eq!(sink.get("version"), Some("1.0.4"));
        assert_eq!(sink.get("stage"), Some("rc"));
        assert_eq!(sink.get("semver"), Some("1.0.4-rc"));
        assert_eq!(sink.get("artifact_name"), Some("paint_system-1.0.4"));
        assert_eq!(sink.entries().len(), 8);
    }

    #[test]
    fn test_stage_warns_on_existing_tag() {
        let file = source_file("version = (1, 0, 4)\n");
        let args = StageWorkflowArgs {
            source: file.path().to_path_buf(),
            stage: ReleaseStage::Gold,
        };
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.4", "abc123");
        let mut sink = MemorySink::new();

        let outcome = run_stage_workflow(
            &args,
            &Config::default(),
            TagCheck::Repo(&repo),
            &mut sink,
        )
        .unwrap();

        assert_eq!(
            outcome.warnings,
            vec![BoundaryWarning::TagAlreadyExists {
                tag: "v1.0.4".to_string()
            }]
        );
        // Still a warning, outputs are written
        assert_eq!(sink.get("tag"), Some("v1.0.4"));
    }

    #[test]
    fn test_stage_new_tag_has_no_warning() {
        let file = source_file("version = (1, 0, 5)\n");
        let args = StageWorkflowArgs {
            source: file.path().to_path_buf(),
            stage: ReleaseStage::Gold,
        };
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.4", "abc123");
        let mut sink = MemorySink::new();

        let outcome = run_stage_workflow(
            &args,
            &Config::default(),
            TagCheck::Repo(&repo),
            &mut sink,
        )
        .unwrap();
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_stage_warns_when_older_than_latest_release() {
        let file = source_file("version = (1, 0, 4)\n");
        let args = StageWorkflowArgs {
            source: file.path().to_path_buf(),
            stage: ReleaseStage::Beta,
        };
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.3", "aaa111");
        repo.add_tag("v1.1.0-rc", "bbb222");
        repo.add_tag("build-9.9.9", "ccc333");
        let mut sink = MemorySink::new();

        let outcome = run_stage_workflow(
            &args,
            &Config::default(),
            TagCheck::Repo(&repo),
            &mut sink,
        )
        .unwrap();

        assert_eq!(
            outcome.warnings,
            vec![BoundaryWarning::OlderThanLatestRelease {
                version: VersionTuple::new(1, 0, 4),
                latest_tag: "v1.1.0-rc".to_string(),
            }]
        );
        assert_eq!(sink.get("tag"), Some("v1.0.4-beta"));
    }

    #[test]
    fn test_stage_same_version_prerelease_tag_is_not_newer() {
        let file = source_file("version = (1, 0, 4)\n");
        let args = StageWorkflowArgs {
            source: file.path().to_path_buf(),
            stage: ReleaseStage::Gold,
        };
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.4-rc", "aaa111");
        let mut sink = MemorySink::new();

        let outcome = run_stage_workflow(
            &args,
            &Config::default(),
            TagCheck::Repo(&repo),
            &mut sink,
        )
        .unwrap();
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_stage_unavailable_repository_warns() {
        let file = source_file("version = (1, 0, 5)\n");
        let args = StageWorkflowArgs {
            source: file.path().to_path_buf(),
            stage: ReleaseStage::Alpha,
        };
        let mut sink = MemorySink::new();

        let outcome = run_stage_workflow(
            &args,
            &Config::default(),
            TagCheck::Unavailable(PathBuf::from("/srv/build")),
            &mut sink,
        )
        .unwrap();
        assert_eq!(
            outcome.warnings,
            vec![BoundaryWarning::NotAGitRepository {
                path: "/srv/build".to_string()
            }]
        );
    }

    #[test]
    fn test_stage_bad_tag_pattern_writes_nothing() {
        let file = source_file("version = (1, 0, 5)\n");
        let args = StageWorkflowArgs {
            source: file.path().to_path_buf(),
            stage: ReleaseStage::Alpha,
        };
        let mut config = Config::default();
        config.release.tag_pattern = "release".to_string();
        let mut sink = MemorySink::new();

        assert!(run_stage_workflow(&args, &config, TagCheck::Skip, &mut sink).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_stage_multiline_config_value_leaves_output_file_untouched() {
        let file = source_file("version = (1, 0, 4)\n");
        let args = StageWorkflowArgs {
            source: file.path().to_path_buf(),
            stage: ReleaseStage::Gold,
        };
        let mut config = Config::default();
        config.release.folder_name = "paint\nsystem".to_string();

        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("github_output");
        let mut sink = FileSink::new(&out);

        let err = run_stage_workflow(&args, &config, TagCheck::Skip, &mut sink).unwrap_err();
        assert!(err.to_string().starts_with("Output error"));
        assert!(!out.exists());

        let mut memory = MemorySink::new();
        assert!(run_stage_workflow(&args, &config, TagCheck::Skip, &mut memory).is_err());
        assert!(memory.is_empty());
    }

    #[test]
    fn test_resolve_emits_declared_text() {
        let file = source_file("version = (01, 2, 3)\n");
        let mut sink = MemorySink::new();

        let outcome = run_resolve_workflow(file.path(), &mut sink).unwrap();
        assert_eq!(sink.get("version"), Some("01.2.3"));
        assert_eq!(outcome.resolution.version, VersionTuple::new(1, 2, 3));
    }

    #[test]
    fn test_compare() {
        let file = source_file("version = (1, 0, 4)\n");

        let newer = run_compare_workflow(file.path(), "v1.0.3").unwrap();
        assert!(newer.is_newer());

        let same = run_compare_workflow(file.path(), "1.0.4-beta").unwrap();
        assert!(!same.is_newer());
        assert_eq!(same.current, same.other);
    }

    #[test]
    fn test_compare_rejects_bad_version() {
        let file = source_file("version = (1, 0, 4)\n");
        assert!(run_compare_workflow(file.path(), "latest").is_err());
    }

    #[test]
    fn test_compare_rejects_out_of_range_version() {
        let file = source_file("version = (1, 0, 4)\n");
        let err = run_compare_workflow(file.path(), "1.0.99999999999").unwrap_err();
        assert!(!err.is_resolution_failure());
        assert!(err.to_string().starts_with("Version parsing error"));
    }
}
