//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use anyhow::Result;

use crate::domain::ReleaseStage;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    comparison_summary, display_boundary_warning, display_error, display_release_plan,
    display_resolution, display_status, display_success, resolution_summary,
};

/// Whether a person is at the terminal to answer prompts
pub fn is_interactive() -> bool {
    console::user_attended()
}

/// Interpret the operator's answer to the stage prompt.
///
/// Empty input picks `default`; otherwise a 1-based index into
/// [ReleaseStage::ALL] or a stage name is accepted.
pub fn parse_stage_selection(input: &str, default: ReleaseStage) -> Result<ReleaseStage> {
    let selection = input.trim();
    if selection.is_empty() {
        return Ok(default);
    }

    if let Ok(index) = selection.parse::<usize>() {
        return match index
            .checked_sub(1)
            .and_then(|i| ReleaseStage::ALL.into_iter().nth(i))
        {
            Some(stage) => Ok(stage),
            None => Err(anyhow::anyhow!("Invalid selection: {}", index)),
        };
    }

    Ok(ReleaseStage::parse(selection)?)
}

/// Prompts the operator to choose a release stage.
///
/// Displays the stages as a numbered list; Enter keeps `default`.
pub fn select_stage(default: ReleaseStage) -> Result<ReleaseStage> {
    println!("\n{}", console::style("Release stages:").bold());
    for (i, stage) in ReleaseStage::ALL.iter().enumerate() {
        let marker = if *stage == default { " (default)" } else { "" };
        println!("  {}. {}{}", i + 1, stage, marker);
    }

    print!("\nSelect a stage (1-{}) [{}]: ", ReleaseStage::ALL.len(), default);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    parse_stage_selection(&input, default)
}
