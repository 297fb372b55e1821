//! Integration tests for the docmatch public API

use docmatch::{
    FileSystemWhereSpecification, InMemoryDocument, Metadata, Notification, WhereSpecification,
    config,
};
use std::fs;
use tempfile::TempDir;

/// Honor RUST_LOG when debugging test failures; repeated calls are no-ops
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn xls_download_metadata() -> Metadata {
    [
        ("Filename", "PDDownload20180328.xls"),
        ("Path", r"C:\temp"),
        ("Extension", ".xls"),
    ]
    .into_iter()
    .collect()
}

/// A fully constrained predicate accepts a document satisfying all three fields
#[test]
fn test_fully_constrained_predicate_accepts_matching_document() {
    init_tracing();
    let spec = FileSystemWhereSpecification {
        filename: Some(r"^PDDownload[\d]+.xls$".to_string()),
        path: Some(r"C:\\temp".to_string()),
        extension: Some("^.xls$".to_string()),
    };

    let document = InMemoryDocument::with_metadata(xls_download_metadata());
    assert!(spec.matches(&document).unwrap());
}

/// Any single failing field rejects the whole document
#[test]
fn test_any_failing_field_rejects_document() {
    init_tracing();
    let document = InMemoryDocument::with_metadata(xls_download_metadata());

    let base = FileSystemWhereSpecification {
        filename: Some(r"^PDDownload[\d]+.xls$".to_string()),
        path: Some(r"C:\\temp".to_string()),
        extension: Some("^.xls$".to_string()),
    };
    assert!(base.matches(&document).unwrap());

    let wrong_filename = FileSystemWhereSpecification {
        filename: Some(r"^Other[\d]+.xls$".to_string()),
        ..base.clone()
    };
    assert!(!wrong_filename.matches(&document).unwrap());

    let wrong_path = FileSystemWhereSpecification {
        path: Some(r"C:\\other".to_string()),
        ..base.clone()
    };
    assert!(!wrong_path.matches(&document).unwrap());

    let wrong_extension = FileSystemWhereSpecification {
        extension: Some("^.txt$".to_string()),
        ..base
    };
    assert!(!wrong_extension.matches(&document).unwrap());
}

/// Predicates loaded from definition files behave like hand-built ones
#[test]
fn test_predicate_loaded_from_file_matches_documents() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("downloads.yml");
    fs::write(
        &path,
        "filename: '^PDDownload[\\d]+.xls$'\nextension: '^.xls$'\n",
    )
    .unwrap();

    let spec = config::load_from_file(&path).unwrap();

    let document = InMemoryDocument::with_metadata(xls_download_metadata());
    assert!(spec.matches(&document).unwrap());

    let other = InMemoryDocument::with_metadata(
        [("Filename", "notes.txt"), ("Extension", ".txt")]
            .into_iter()
            .collect(),
    );
    assert!(!spec.matches(&other).unwrap());
}

/// Validation runs across a whole set of predicates before any matching
#[test]
fn test_validation_accumulates_across_predicates() {
    init_tracing();
    let configured = FileSystemWhereSpecification {
        filename: Some(r"^report-\d+\.pdf$".to_string()),
        ..Default::default()
    };
    let unconfigured = FileSystemWhereSpecification::new();
    let empty = FileSystemWhereSpecification {
        filename: Some(String::new()),
        ..Default::default()
    };

    let specs: Vec<&dyn WhereSpecification> = vec![&configured, &unconfigured, &empty];

    let mut notification = Notification::new();
    for spec in &specs {
        spec.validate(&mut notification);
    }

    assert!(notification.has_errors());
    assert_eq!(notification.errors().len(), 2);
    assert!(notification.includes_error("Filename value has not been specified."));
}

/// A predicate with a bad pattern surfaces the error instead of silently rejecting
#[test]
fn test_bad_pattern_from_file_surfaces_at_match_time() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.yml");
    fs::write(&path, "filename: '[unclosed'\n").unwrap();

    // Loading succeeds - patterns are only compiled when matching runs
    let spec = config::load_from_file(&path).unwrap();

    let document = InMemoryDocument::with_metadata(xls_download_metadata());
    let err = spec.matches(&document).unwrap_err();
    assert!(err.to_string().contains("[unclosed"));
}
