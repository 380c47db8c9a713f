//! Release plan - everything the downstream build and release actions consume

use crate::config::Config;
use crate::domain::{ReleaseStage, TagPattern, VersionTuple};
use crate::error::Result;
use crate::resolver::Resolution;

/// Resolved inputs for one release run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    /// Version text as declared in the source file
    pub declared: String,
    pub version: VersionTuple,
    pub stage: ReleaseStage,
    /// Semver string including the stage suffix for pre-releases
    pub semver: String,
    pub product_name: String,
    pub exclude: Vec<String>,
    pub artifact_name: String,
    pub folder_name: String,
    pub tag: String,
}

impl ReleasePlan {
    /// Build a plan from a version tuple, the operator's stage and config
    pub fn new(version: VersionTuple, stage: ReleaseStage, config: &Config) -> Result<Self> {
        Self::build(version.to_string(), version, stage, config)
    }

    /// Build a plan that carries the declared version text through to the
    /// `version` output and the artifact name. Semver and tag use the
    /// normalized tuple.
    pub fn from_resolution(
        resolution: &Resolution,
        stage: ReleaseStage,
        config: &Config,
    ) -> Result<Self> {
        Self::build(
            resolution.version_string.clone(),
            resolution.version,
            stage,
            config,
        )
    }

    fn build(
        declared: String,
        version: VersionTuple,
        stage: ReleaseStage,
        config: &Config,
    ) -> Result<Self> {
        let semver = version.to_semver(stage)?.to_string();
        let pattern = TagPattern::new(config.release.tag_pattern.as_str())?;
        let product_name = config.build.product_name.clone();

        let artifact_name = config
            .release
            .artifact_name
            .replace("{product}", &product_name)
            .replace("{version}", &declared)
            .replace("{stage}", stage.as_str());

        Ok(ReleasePlan {
            declared,
            version,
            stage,
            tag: pattern.format(&semver),
            semver,
            product_name,
            exclude: config.build.exclude.clone(),
            artifact_name,
            folder_name: config.release.folder_name.clone(),
        })
    }

    /// Step outputs in a stable order
    pub fn outputs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("version", self.declared.clone()),
            ("stage", self.stage.to_string()),
            ("semver", self.semver.clone()),
            ("tag", self.tag.clone()),
            ("product_name", self.product_name.clone()),
            ("exclude", self.exclude.join(",")),
            ("artifact_name", self.artifact_name.clone()),
            ("folder_name", self.folder_name.clone()),
        ]
    }
}
