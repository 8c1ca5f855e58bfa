use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use tempfile::TempDir;
use treegen_write::{FillMode, GenConfig, GenError, GenReport, Generator};

/// Files under `root` keyed by relative path, with their contents.
fn snapshot_files(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let path = entry.path();
            let data = fs::read(&path).unwrap();
            (path.strip_prefix(root).unwrap().to_path_buf(), data)
        })
        .collect()
}

/// Directories strictly below `root`, relative to it.
fn snapshot_dirs(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .filter(|rel| !rel.as_os_str().is_empty())
        .collect()
}

fn sizes(files: &BTreeMap<PathBuf, Vec<u8>>) -> BTreeMap<PathBuf, usize> {
    files.iter().map(|(p, d)| (p.clone(), d.len())).collect()
}

fn generate(config: GenConfig) -> GenReport {
    Generator::new(config).unwrap().run_once(1).unwrap()
}

#[test]
fn test_small_zero_filled_scenario() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let config_for = |temp: &TempDir| {
        GenConfig::builder()
            .root(temp.path().join("out"))
            .file_count(5u64)
            .files_per_directory(5u64)
            .max_depth(2u32)
            .min_size(10u64)
            .max_size(10u64)
            .seed(7u64)
            .fill(FillMode::Zero)
            .build()
            .unwrap()
    };

    let report = generate(config_for(&first));
    assert_eq!(report.stats.files, 5);
    assert_eq!(report.stats.total_bytes, 50);

    let root = first.path().join("out");
    let files = snapshot_files(&root);
    assert_eq!(files.len(), 5);
    for data in files.values() {
        assert_eq!(data, &vec![0u8; 10]);
    }
    assert!(snapshot_dirs(&root).len() <= 1);

    generate(config_for(&second));
    assert_eq!(files, snapshot_files(&second.path().join("out")));
}

#[test]
fn test_same_seed_same_layout_with_random_content() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let mut config = GenConfig::new(first.path().join("tree"));
    config.file_count = 300;
    config.seed = 1234;
    generate(config.clone());

    config.root = second.path().join("tree");
    generate(config);

    let a = snapshot_files(&first.path().join("tree"));
    let b = snapshot_files(&second.path().join("tree"));
    assert_eq!(a.len(), 300);
    assert_eq!(sizes(&a), sizes(&b));
    assert_eq!(
        snapshot_dirs(&first.path().join("tree")),
        snapshot_dirs(&second.path().join("tree"))
    );
}

#[test]
fn test_different_seed_different_layout() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let mut config = GenConfig::new(first.path().join("tree"));
    config.file_count = 100;
    config.fill = FillMode::Zero;
    generate(config.clone());

    config.root = second.path().join("tree");
    config.seed = 2;
    generate(config);

    assert_ne!(
        sizes(&snapshot_files(&first.path().join("tree"))),
        sizes(&snapshot_files(&second.path().join("tree")))
    );
}

#[test]
fn test_sizes_and_names_within_bounds() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("bounds");
    let config = GenConfig::builder()
        .root(&root)
        .file_count(400u64)
        .min_size(20u64)
        .max_size(30u64)
        .min_name_length(5usize)
        .max_name_length(8usize)
        .fill(FillMode::Zero)
        .build()
        .unwrap();
    generate(config);

    let files = snapshot_files(&root);
    assert_eq!(files.len(), 400);
    for (path, data) in &files {
        assert!((20..30).contains(&data.len()), "{}", path.display());
        for component in path.components() {
            let len = component.as_os_str().len();
            assert!((5..8).contains(&len), "{}", path.display());
        }
    }
}

#[test]
fn test_directory_count_and_depth() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("deep");
    let mut config = GenConfig::new(&root);
    config.file_count = 600;
    config.files_per_directory = 3;
    config.max_depth = 4;
    config.min_size = 0;
    config.max_size = 1;
    config.fill = FillMode::Zero;

    let report = generate(config);
    assert_eq!(report.stats.directories, 200);

    let dirs = snapshot_dirs(&root);
    // Only directories that received a file exist on disk.
    assert!(dirs.len() <= 200);
    for dir in &dirs {
        // Root is depth 1, so at most three levels below it.
        assert!(dir.components().count() <= 3, "{}", dir.display());
    }
}

#[test]
fn test_injected_content_source() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("injected");
    let mut config = GenConfig::new(&root);
    config.file_count = 20;

    Generator::with_content(config, io::repeat(0x5a))
        .unwrap()
        .run_once(1)
        .unwrap();

    for data in snapshot_files(&root).values() {
        assert!(data.iter().all(|&b| b == 0x5a));
    }
}

#[test]
fn test_repeat_mode_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("loop");
    let mut config = GenConfig::new(&root);
    config.file_count = 120;
    config.fill = FillMode::Zero;
    config.repeat = true;

    let mut generator = Generator::new(config).unwrap();
    let mut snapshots = Vec::new();
    let runs = generator
        .run(Some(3), |report| {
            snapshots.push((report.stats, snapshot_files(&root), snapshot_dirs(&root)));
            Ok::<_, GenError>(())
        })
        .unwrap();

    assert_eq!(runs, 3);
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[0].1.len(), 120);
    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[1], snapshots[2]);
}

#[test]
fn test_blocked_root_is_fatal() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("not-a-dir");
    fs::write(&root, b"occupied").unwrap();

    let mut config = GenConfig::new(&root);
    config.file_count = 3;

    let err = Generator::new(config).unwrap().run_once(1).unwrap_err();
    assert!(matches!(err, GenError::CreateDirectory { .. }));
    assert!(err.to_string().contains("not-a-dir"));
}

#[test]
fn test_zero_files_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("empty");
    let mut config = GenConfig::new(&root);
    config.file_count = 0;

    let report = generate(config);
    assert_eq!(report.stats.files, 0);
    assert_eq!(report.stats.directories, 0);
    assert!(!root.exists());
}
