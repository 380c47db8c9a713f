use addon_release::boundary::BoundaryWarning;
use addon_release::domain::VersionTuple;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_multiple_declarations_display() {
    let warning = BoundaryWarning::MultipleDeclarations {
        count: 3,
        chosen: VersionTuple::new(1, 0, 4),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Found 3 version declarations"),
        "Message should contain the declaration count, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("1.0.4"),
        "Message should contain the chosen version '1.0.4', got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_tag_already_exists_display() {
    let warning = BoundaryWarning::TagAlreadyExists {
        tag: "v1.0.4".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("v1.0.4") && display_msg.contains("already exists"),
        "Message should name the existing tag, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_not_a_git_repository_display() {
    let warning = BoundaryWarning::NotAGitRepository {
        path: "/srv/build".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("/srv/build"),
        "Message should contain the path, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("skipping tag check"),
        "Message should say the check was skipped, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_zero_version_display() {
    assert_eq!(
        BoundaryWarning::ZeroVersion.to_string(),
        "Resolved version is 0.0.0"
    );
}

#[test]
fn test_boundary_warning_older_than_latest_release_display() {
    let warning = BoundaryWarning::OlderThanLatestRelease {
        version: VersionTuple::new(1, 0, 4),
        latest_tag: "v1.1.0".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "Version 1.0.4 is older than the latest release tag 'v1.1.0'"
    );
}
