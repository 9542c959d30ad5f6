//! End-to-end tests combining canonicalization, containment, directory
//! materialization and OS-backed resolution the way a tracer uses them.
//!
//! Each test builds a scratch tree in a temporary directory and treats a
//! second temporary directory as the mirror root that traced files are
//! copied into.

use std::fs;
use std::path::Path;

use canopath::path::{DirectoryMaterializer, ExecMode, FsResolver, MkdirPolicy, TargetDirectory};
use canopath::{canonicalize, is_within_directory, make_directory_recursive, Error};
use tempfile::tempdir;

fn as_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

/// A filename relative to the traced process's cwd is mirrored under the
/// package root with all of its parent directories.
#[test]
fn test_mirror_relative_file_under_package_root() {
    let work = tempdir().unwrap();
    let mirror = tempdir().unwrap();
    let cwd = format!("{}/project/src", as_str(work.path()));

    let cano = canonicalize("../data/./input.txt", &cwd).unwrap();
    assert_eq!(cano, format!("{}/project/data/input.txt", as_str(work.path())));

    let mirrored = format!("{}{cano}", as_str(mirror.path()));
    let report = make_directory_recursive(&mirrored, true).unwrap();
    assert!(report.is_complete());

    let parent = Path::new(&mirrored).parent().unwrap();
    assert!(parent.is_dir());
    assert!(!Path::new(&mirrored).exists());
    assert_eq!(report.requested.last().map(String::as_str), Some(as_str(parent)));
}

/// Files inside the traced program's working tree are kept apart from
/// files elsewhere, including siblings sharing a name prefix.
#[test]
fn test_classify_files_against_working_tree() {
    let target = TargetDirectory::new("/home/user/project").unwrap();

    let inside = ["main.py", "./lib/util.py", "lib/../README", "/home/user/project/x"];
    for file in inside {
        assert!(target.contains(file, "/home/user/project").unwrap(), "{file}");
    }

    let outside = [
        "../project2/main.py",
        "/home/user/project",
        "/home/user/projectile",
        "/usr/lib/python3/os.py",
    ];
    for file in outside {
        assert!(!target.contains(file, "/home/user/project").unwrap(), "{file}");
    }
}

/// A traced process changes directory; the same relative name now resolves
/// elsewhere.
#[test]
fn test_per_process_cwd_changes_resolution() {
    assert!(is_within_directory("config.yaml", "/srv/app", "/srv/app/etc").unwrap());
    assert!(!is_within_directory("config.yaml", "/srv/app", "/srv").unwrap());
}

/// A symlink is reproduced in the mirror by copying its link text, not by
/// following it.
#[cfg(unix)]
#[test]
fn test_reproduce_symlink_in_mirror() {
    use std::os::unix::fs::symlink;

    let work = tempdir().unwrap();
    let mirror = tempdir().unwrap();
    let tests_dir = work.path().join("tests");
    fs::create_dir(&tests_dir).unwrap();
    fs::write(tests_dir.join("test_file.txt"), "hello").unwrap();
    symlink("test_file.txt", tests_dir.join("test_file.symlink")).unwrap();

    let resolver = FsResolver::new(ExecMode::Native);
    let link = canonicalize("test_file.symlink", as_str(&tests_dir)).unwrap();
    let link_text = resolver.symlink_target(&link).unwrap();
    assert_eq!(link_text, "test_file.txt");

    let mirrored_link = format!("{}{link}", as_str(mirror.path()));
    make_directory_recursive(&mirrored_link, true).unwrap();
    symlink(&link_text, &mirrored_link).unwrap();
    assert_eq!(fs::read_link(&mirrored_link).unwrap(), Path::new("test_file.txt"));

    let destination = resolver.link_destination("test_file.symlink", as_str(&tests_dir)).unwrap();
    assert_eq!(destination, canonicalize("test_file.txt", as_str(&tests_dir)).unwrap());
}

/// Real-path resolution sees through a symlinked directory that symbolic
/// canonicalization cannot.
#[cfg(unix)]
#[test]
fn test_real_path_differs_from_symbolic_through_symlinked_dir() {
    use std::os::unix::fs::symlink;

    let work = tempdir().unwrap();
    let real_dir = work.path().join("real");
    fs::create_dir(&real_dir).unwrap();
    fs::write(real_dir.join("file"), "x").unwrap();
    symlink(&real_dir, work.path().join("alias")).unwrap();

    let symbolic = canonicalize("alias/file", as_str(work.path())).unwrap();
    assert!(symbolic.ends_with("/alias/file"));

    let real = FsResolver::new(ExecMode::Native).real_path(&symbolic).unwrap();
    assert_eq!(real, as_str(&fs::canonicalize(real_dir.join("file")).unwrap()));
}

/// Under sandboxed execution nothing touches the real filesystem, but the
/// symbolic operations keep working.
#[test]
fn test_sandboxed_mode_only_blocks_os_resolution() {
    let resolver = FsResolver::new(ExecMode::Sandboxed);
    assert!(matches!(
        resolver.real_path("/").unwrap_err(),
        Error::ResolutionForbidden { .. }
    ));
    assert!(matches!(
        resolver.symlink_target("/").unwrap_err(),
        Error::ResolutionForbidden { .. }
    ));
    assert_eq!(canonicalize("b", "/a").unwrap(), "/a/b");
}

/// A regular file in the middle of the chain stops strict creation but not
/// best-effort creation.
#[test]
fn test_file_blocking_directory_chain() {
    let work = tempdir().unwrap();
    fs::write(work.path().join("blocker"), "not a dir").unwrap();
    let target = format!("{}/blocker/sub/leaf", as_str(work.path()));

    let report = DirectoryMaterializer::new().materialize(&target, false).unwrap();
    assert!(!report.is_complete());
    assert!(report.existing.iter().any(|p| p.ends_with("/blocker")));

    let err = DirectoryMaterializer::new()
        .with_policy(MkdirPolicy::Strict)
        .materialize(&target, false)
        .unwrap_err();
    match err {
        Error::DirectoryCreation { path, .. } => assert!(path.ends_with("/blocker/sub")),
        other => panic!("unexpected error: {other}"),
    }
}
