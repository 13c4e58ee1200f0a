//! End-to-end generate/verify round-trip tests.

use mangen::verify::{self, VerifyOutcome};
use mangen::walker::{DirectoryWalker, ExclusionFilter};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Generate a complete manifest (body + checksum line) for a tree.
fn generate(root: &Path) -> Vec<u8> {
    let walker = DirectoryWalker::new(root.to_path_buf());
    let mut out = Vec::new();
    let checksum = walker.walk(&mut out).unwrap();
    out.extend_from_slice(mangen::manifest::checksum_line(checksum).as_bytes());
    out
}

fn verify_bytes(dir: &TempDir, manifest: &[u8]) -> VerifyOutcome {
    let path = dir.path().join("manifest.out");
    fs::write(&path, manifest).unwrap();
    verify::verify(&path).unwrap()
}

#[test]
fn test_end_to_end_known_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "hi").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("b.log"), "x").unwrap();

    let manifest = generate(&root);
    assert_eq!(
        String::from_utf8(manifest.clone()).unwrap(),
        "a.txt : F41B5622\nsub/b.log : 0078F8E9\nManifest checksum: 9C0739CA\n"
    );
    assert_eq!(verify_bytes(&temp_dir, &manifest), VerifyOutcome::Valid);

    // Dropping the sub/b.log line breaks the aggregate checksum.
    let truncated = String::from_utf8(manifest)
        .unwrap()
        .replacen("sub/b.log : 0078F8E9\n", "", 1);
    assert_eq!(
        verify_bytes(&temp_dir, truncated.as_bytes()),
        VerifyOutcome::Corrupted
    );
}

#[test]
fn test_roundtrip_empty_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir(&root).unwrap();

    let manifest = generate(&root);
    assert_eq!(
        String::from_utf8(manifest.clone()).unwrap(),
        "Manifest checksum: 00000001\n"
    );
    assert_eq!(verify_bytes(&temp_dir, &manifest), VerifyOutcome::Valid);
}

#[test]
fn test_roundtrip_zero_byte_files_and_empty_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("empty.bin"), "").unwrap();
    fs::create_dir(root.join("hollow")).unwrap();

    let manifest = generate(&root);
    let text = String::from_utf8(manifest.clone()).unwrap();
    // Empty directories contribute no lines; zero-byte files hash to 1.
    assert_eq!(
        text,
        format!(
            "empty.bin : 00000001\nManifest checksum: {:08X}\n",
            expected_aggregate("empty.bin : 00000001\n")
        )
    );
    assert_eq!(verify_bytes(&temp_dir, &manifest), VerifyOutcome::Valid);
}

#[test]
fn test_roundtrip_deeply_nested_paths() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    let mut deep = root.clone();
    for level in 0..20 {
        deep = deep.join(format!("level{:02}", level));
    }
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("leaf.txt"), "deep").unwrap();

    let manifest = generate(&root);
    let text = String::from_utf8(manifest.clone()).unwrap();
    assert!(text.contains("level00/level01/"));
    assert!(text.contains("level19/leaf.txt :"));
    assert_eq!(verify_bytes(&temp_dir, &manifest), VerifyOutcome::Valid);
}

#[test]
fn test_generation_is_byte_identical_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir(&root).unwrap();
    for name in ["delta", "alpha", "charlie", "bravo"] {
        fs::write(root.join(name), name).unwrap();
    }
    fs::create_dir(root.join("nested")).unwrap();
    fs::write(root.join("nested").join("inner"), "inner").unwrap();

    assert_eq!(generate(&root), generate(&root));
}

#[test]
fn test_content_change_changes_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("file.txt"), "before").unwrap();

    let first = generate(&root);
    fs::write(root.join("file.txt"), "after").unwrap();
    let second = generate(&root);
    assert_ne!(first, second);
}

#[test]
fn test_filter_changes_manifest_but_roundtrip_still_valid() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("keep.txt"), "keep").unwrap();
    fs::write(root.join("drop.log"), "drop").unwrap();

    let filter = ExclusionFilter {
        exclude_name: None,
        exclude_pattern: Some("*.log".to_string()),
    };
    let walker = DirectoryWalker::with_filter(root.clone(), filter);
    let mut out = Vec::new();
    let checksum = walker.walk(&mut out).unwrap();
    out.extend_from_slice(mangen::manifest::checksum_line(checksum).as_bytes());

    let text = String::from_utf8(out.clone()).unwrap();
    assert!(text.contains("keep.txt :"));
    assert!(!text.contains("drop.log"));
    assert_eq!(verify_bytes(&temp_dir, &out), VerifyOutcome::Valid);
}

fn expected_aggregate(body: &str) -> u32 {
    let mut checksum = mangen::hash::RollingChecksum::new();
    checksum.update(body.as_bytes());
    checksum.value()
}
