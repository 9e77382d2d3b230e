//! Integration tests for workspace root discovery

use depswitch::find_workspace_root;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_find_root_from_module_dir() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("settings.gradle"), "include ':Libraries:Core'\n").unwrap();
    let module_dir = root.join("Libraries/Core/src/main");
    fs::create_dir_all(&module_dir).unwrap();

    let found = find_workspace_root(&module_dir).unwrap();
    assert_eq!(found, root);
}

#[test]
fn test_find_root_at_start_dir() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("depswitch.toml"), "group = \"com.example\"\n").unwrap();

    assert_eq!(find_workspace_root(root).unwrap(), root);
}
