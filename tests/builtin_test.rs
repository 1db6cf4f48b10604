use std::fs;

use stencil::builtin::{find_binary, register_builtin_types};
use stencil::config::Config;
use stencil::registry::Registry;
use tempfile::TempDir;

#[test]
fn test_find_binary_checks_paths_in_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(second.path().join("python3"), "").unwrap();

    let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];
    let found = find_binary("python3", &paths).unwrap();
    assert_eq!(found, second.path().join("python3"));

    fs::write(first.path().join("python3"), "").unwrap();
    let found = find_binary("python3", &paths).unwrap();
    assert_eq!(found, first.path().join("python3"));
}

#[test]
fn test_find_binary_returns_none_when_absent() {
    let dir = TempDir::new().unwrap();
    assert!(find_binary("no-such-binary", &[dir.path().to_path_buf()]).is_none());
}

#[test]
fn test_builtin_types_are_registered() {
    let mut registry = Registry::new();
    register_builtin_types(&mut registry, &Config::default()).unwrap();

    let mut names = registry.names();
    names.sort();
    assert_eq!(names, vec!["c", "python"]);

    let python = registry.lookup("python").unwrap();
    assert_eq!(python.template, "python");
    assert_eq!(python.license.as_deref(), Some("MIT"));
    assert_eq!(python.replacements[0].token, "__PYTHON__");
}
