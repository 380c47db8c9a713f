//! Pure formatting functions for UI output.
//!
//! All diagnostics go through here. Step outputs never do; they belong to the
//! output sink. Styling comes from `console`, which drops colors when the
//! stream is not a terminal.

use crate::boundary::BoundaryWarning;
use crate::domain::{ReleasePlan, VersionTuple};
use crate::resolver::Resolution;
use console::style;
use std::path::Path;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One-line summary of where a version came from.
pub fn resolution_summary(resolution: &Resolution, source: &Path) -> String {
    format!(
        "Resolved version {} from {}:{} ({} declaration)",
        resolution.version_string,
        source.display(),
        resolution.line,
        resolution.shape
    )
}

/// Display a resolved version
pub fn display_resolution(resolution: &Resolution, source: &Path) {
    display_success(&resolution_summary(resolution, source));
}

/// Display the release plan handed to the build and release actions.
pub fn display_release_plan(plan: &ReleasePlan) {
    println!("\n{}", style("Release plan:").bold());
    println!("  Version:   {}", style(&plan.semver).green());
    println!("  Stage:     {}", plan.stage);
    println!("  Tag:       {}", style(&plan.tag).cyan());
    println!("  Product:   {}", plan.product_name);
    println!("  Artifact:  {}", plan.artifact_name);
    println!("  Folder:    {}", plan.folder_name);
    if !plan.exclude.is_empty() {
        println!("  Excluding: {}", plan.exclude.join(", "));
    }
}

/// Sentence describing how two versions relate.
pub fn comparison_summary(current: &VersionTuple, other: &VersionTuple) -> String {
    if current.is_newer_than(other) {
        format!("{} is newer than {}", current, other)
    } else if current == other {
        format!("{} is the same as {}", current, other)
    } else {
        format!("{} is older than {}", current, other)
    }
}
