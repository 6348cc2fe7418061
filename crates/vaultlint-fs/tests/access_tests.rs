//! Tests for the host filesystem capability under real conditions

use assert_fs::prelude::*;
use vaultlint_fs::{FsAccess, ListError, StdFs};

#[test]
fn test_exists_and_is_dir_distinguish_kinds() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("notes").create_dir_all().unwrap();
    temp.child("index.md").touch().unwrap();

    assert!(StdFs.exists(temp.child("notes").path()));
    assert!(StdFs.is_dir(temp.child("notes").path()));
    assert!(StdFs.exists(temp.child("index.md").path()));
    assert!(!StdFs.is_dir(temp.child("index.md").path()));
    assert!(!StdFs.exists(temp.child("missing").path()));
}

#[test]
fn test_listing_a_file_is_an_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("index.md").touch().unwrap();

    let result = StdFs.list_entries(temp.child("index.md").path());
    assert!(matches!(result, Err(ListError::Other(_))));
}

#[test]
fn test_listing_empty_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    assert!(StdFs.list_entries(temp.path()).unwrap().is_empty());
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn test_unreadable_directory_reports_permission_denied() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let temp = assert_fs::TempDir::new().unwrap();
        let locked = temp.child("locked");
        locked.create_dir_all().unwrap();
        fs::set_permissions(locked.path(), Permissions::from_mode(0o000)).unwrap();

        let result = StdFs.list_entries(locked.path());

        fs::set_permissions(locked.path(), Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(result, Err(ListError::PermissionDenied)));
    }

    #[test]
    fn test_dangling_symlink_does_not_exist() {
        let temp = assert_fs::TempDir::new().unwrap();
        let link = temp.child("dangling");
        std::os::unix::fs::symlink(temp.path().join("gone"), link.path()).unwrap();

        assert!(!StdFs.exists(link.path()));
        let entries = StdFs.list_entries(temp.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_dir);
    }
}
