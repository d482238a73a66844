//! Flatten tests: copying, basename collisions, option validation.

use flatdir::{
    Copier, FileCallback, FlattenOpts, LogLevel, Logger, MemoryLogger, WalkConfig, WalkError,
    flatten_dir, preview_dir, walk_files,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

fn quiet() -> Arc<dyn Logger> {
    Arc::new(MemoryLogger::new())
}

/// `source/` and `target/` under one temp dir.
fn source_and_target() -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    let target = tmp.path().join("target");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&target).unwrap();
    (tmp, source, target)
}

#[tokio::test]
async fn test_flatten_copies_every_file() {
    let (_tmp, source, target) = source_and_target();
    let mut expected = Vec::new();
    let mut dir = String::new();
    for child in ["one", "two", "three", "four"] {
        dir = if dir.is_empty() {
            child.to_string()
        } else {
            format!("{dir}/{child}")
        };
        for n in 1..=3 {
            let name = format!("{child}File{n}");
            touch(&source, &format!("{dir}/{name}"), &format!("{dir}:{n}"));
            expected.push((name, format!("{dir}:{n}")));
        }
        let dotfile = format!(".{child}Dotfile");
        touch(&source, &format!("{dir}/{dotfile}"), child);
        expected.push((dotfile, child.to_string()));
    }

    let opts = FlattenOpts::positional(&source, &target, None)
        .validate(&MemoryLogger::new())
        .unwrap();
    let summary = flatten_dir(&opts, quiet()).await.unwrap();

    assert_eq!(summary.files, 16);
    assert_eq!(fs::read_dir(&target).unwrap().count(), 16);
    for (name, contents) in expected {
        assert_eq!(fs::read_to_string(target.join(&name)).unwrap(), contents);
    }
}

#[tokio::test]
async fn test_basename_collision_last_write_wins() {
    let (_tmp, source, target) = source_and_target();
    touch(&source, "a/x.txt", "from a");
    touch(&source, "b/x.txt", "from b");

    let opts = FlattenOpts::positional(&source, &target, None)
        .validate(&MemoryLogger::new())
        .unwrap();
    let order = walk_files(&opts.walk_config(), quiet()).unwrap();
    let last = fs::read_to_string(order.last().unwrap()).unwrap();

    let logger = Arc::new(MemoryLogger::new());
    flatten_dir(&opts, logger.clone()).await.unwrap();

    let warnings = logger.messages(LogLevel::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("already written; overwriting with"));
    assert!(warnings[0].ends_with(&order[1].display().to_string()));
    assert_eq!(fs::read_to_string(target.join("x.txt")).unwrap(), last);
}

#[tokio::test]
async fn test_copier_tracks_written_files() {
    let (_tmp, source, target) = source_and_target();
    let first = touch(&source, "a/x.txt", "1");
    let second = touch(&source, "b/x.txt", "2");
    let other = touch(&source, "b/y.txt", "3");

    let mut copier = Copier::new(&target, quiet());
    copier.call(&first).await.unwrap();
    copier.call(&other).await.unwrap();
    copier.call(&second).await.unwrap();

    assert_eq!(copier.written().len(), 2);
    assert_eq!(copier.written().get("x.txt"), Some(second.as_path()));
    assert_eq!(copier.written().get("y.txt"), Some(other.as_path()));
    assert_eq!(fs::read_to_string(target.join("x.txt")).unwrap(), "2");
}

#[tokio::test]
async fn test_flatten_respects_depth_and_exclusions() {
    let (_tmp, source, target) = source_and_target();
    touch(&source, "keep.txt", "k");
    touch(&source, "node_modules/pkg/index.js", "");
    touch(&source, "a/b/too_deep.txt", "");
    touch(&source, "a/near.txt", "n");

    let mut opts = FlattenOpts::positional(&source, &target, Some(2));
    opts.exclude = vec!["node_modules".to_string()];
    let opts = opts.validate(&MemoryLogger::new()).unwrap();
    let summary = flatten_dir(&opts, quiet()).await.unwrap();

    assert_eq!(summary.files, 2);
    let mut names: Vec<String> = fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["keep.txt", "near.txt"]);
}

#[tokio::test]
async fn test_non_utf8_file_fails_the_flatten() {
    let (_tmp, source, target) = source_and_target();
    let bad = source.join("blob.bin");
    fs::write(&bad, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let opts = FlattenOpts::positional(&source, &target, None)
        .validate(&MemoryLogger::new())
        .unwrap();
    match flatten_dir(&opts, quiet()).await.unwrap_err() {
        WalkError::Callback { path, .. } => assert_eq!(path, bad),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!target.join("blob.bin").exists());
}

#[tokio::test]
async fn test_preview_copies_nothing() {
    let (_tmp, source, target) = source_and_target();
    touch(&source, "a/x.txt", "x");
    touch(&source, "y.txt", "y");

    let opts = FlattenOpts::positional(&source, &target, None)
        .validate(&MemoryLogger::new())
        .unwrap();
    let summary = preview_dir(&opts, quiet()).await.unwrap();
    assert_eq!(summary.files, 2);
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}

// --- validation ---

#[test]
fn test_validate_resolves_absolute_paths() {
    let (_tmp, source, target) = source_and_target();
    let opts = FlattenOpts::positional(&source, &target, Some(5))
        .validate(&MemoryLogger::new())
        .unwrap();
    assert!(opts.source.is_absolute());
    assert_eq!(opts.source, source);
    assert_eq!(opts.target, target);
    let config: WalkConfig = opts.walk_config();
    assert_eq!(config.root, source);
    assert_eq!(config.max_depth, 5);
}

#[test]
fn test_validate_rejects_file_source() {
    let (_tmp, source, target) = source_and_target();
    let file = touch(&source, "file.txt", "");
    let logger = MemoryLogger::new();
    let err = FlattenOpts::positional(&file, &target, None)
        .validate(&logger)
        .unwrap_err();
    match err {
        WalkError::InvalidDirectory { role, path } => {
            assert_eq!(role, "source");
            assert_eq!(path, file);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        logger.messages(LogLevel::Error),
        vec![format!("source must be a directory: {}", file.display())]
    );
}

#[test]
fn test_validate_rejects_missing_target() {
    let (_tmp, source, target) = source_and_target();
    let missing = target.join("missing");
    let err = FlattenOpts::positional(&source, &missing, None)
        .validate(&MemoryLogger::new())
        .unwrap_err();
    assert!(matches!(err, WalkError::Io { ref path, .. } if *path == missing));
}

#[cfg(unix)]
#[test]
fn test_validate_rejects_unwritable_target() {
    use std::os::unix::fs::PermissionsExt;

    let (_tmp, source, target) = source_and_target();
    fs::set_permissions(&target, fs::Permissions::from_mode(0o555)).unwrap();
    if tempfile::tempfile_in(&target).is_ok() {
        // Running as root: mode bits do not restrict writes.
        fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }
    let result = FlattenOpts::positional(&source, &target, None).validate(&MemoryLogger::new());
    fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).unwrap();
    match result.unwrap_err() {
        WalkError::Io { path, source: err } => {
            assert_eq!(path, target);
            assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validate_warns_on_negative_depth() {
    let (_tmp, source, target) = source_and_target();
    let logger = MemoryLogger::new();
    let opts = FlattenOpts::positional(&source, &target, Some(-2))
        .validate(&logger)
        .unwrap();
    assert_eq!(opts.max_depth, -2);
    assert_eq!(
        logger.messages(LogLevel::Warn),
        vec!["Negative maxdepth (-2) will find zero files".to_string()]
    );
}
