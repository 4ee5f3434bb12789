//! File-level rewrite behavior: preview never writes, apply writes once.

use std::fs::File;
use std::io::Write;

use tempfile::TempDir;

use restyle_edit::{RewriteConfig, Rewriter, Rule};

#[test]
fn test_file_preview_leaves_file_untouched() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = dir.path().join("Edge.tsx");
    let content = "<path className=\"connection-path-bg\" d={d} />";

    File::create(&path)
        .expect("Create file")
        .write_all(content.as_bytes())
        .expect("Write content");

    let rules = vec![Rule::literal(
        "hit-area-classes",
        "className=\"connection-path-bg\"",
        "className=\"fill-none stroke-transparent stroke-[20px]\"",
    )];
    let result = Rewriter::preview(&path, &rules).expect("Should preview");

    assert_eq!(result.count, 1);
    assert!(result.modified.contains("stroke-transparent"));

    let on_disk = std::fs::read_to_string(&path).expect("Read file");
    assert_eq!(on_disk, content); // Original unchanged
}

#[test]
fn test_file_apply_rewrites_in_place() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = dir.path().join("Canvas.tsx");

    File::create(&path)
        .expect("Create file")
        .write_all(b"<svg className=\"canvas-svg\">")
        .expect("Write content");

    let rules = vec![Rule::literal(
        "svg-classes",
        "className=\"canvas-svg\"",
        "className=\"absolute inset-0 w-full h-full pointer-events-none z-0\"",
    )];
    let result = Rewriter::apply(&path, &rules).expect("Should apply");

    assert_eq!(result.count, 1);

    let on_disk = std::fs::read_to_string(&path).expect("Read file");
    assert!(on_disk.contains("pointer-events-none z-0"));
    assert!(!on_disk.contains("canvas-svg"));
}

#[test]
fn test_file_apply_without_matches_does_not_rewrite() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = dir.path().join("Other.tsx");

    File::create(&path)
        .expect("Create file")
        .write_all(b"nothing to see here")
        .expect("Write content");

    let rules = vec![Rule::literal("miss", "absent", "replacement")];
    let result = Rewriter::apply(&path, &rules).expect("Should run");

    assert_eq!(result.count, 0);
    assert_eq!(result.outcomes[0].matches, 0);

    let on_disk = std::fs::read_to_string(&path).expect("Read file");
    assert_eq!(on_disk, "nothing to see here");
}

#[test]
fn test_missing_file_is_hard_error() {
    let dir = TempDir::new().expect("Create temp dir");
    let path = dir.path().join("DoesNotExist.tsx");

    let rules = vec![Rule::literal("any", "a", "b")];
    let result = Rewriter::rewrite_file(&path, &rules, &RewriteConfig::default());

    assert!(result.is_err());
}
