use std::fs;

use stencil::error::Error;
use stencil::license::{available_licenses, instantiate_license};
use stencil::resolver::Replacement;
use stencil::substitute::Substituter;
use tempfile::TempDir;

#[test]
fn test_license_is_substituted_and_written() {
    let root = TempDir::new().unwrap();
    let license_file = root.path().join("MIT");
    fs::write(&license_file, "Copyright (c) __YEAR__ __AUTHOR__\n").unwrap();

    let replacements = vec![
        Replacement::new("__YEAR__", "2024"),
        Replacement::new("__AUTHOR__", "Jane Doe"),
    ];
    let sub = Substituter::new(&replacements).unwrap();
    let destination = root.path().join("project/COPYING");

    instantiate_license(&license_file, &destination, &sub).unwrap();

    let written = fs::read_to_string(&destination).unwrap();
    assert_eq!(written, "Copyright (c) 2024 Jane Doe\n");
}

#[test]
fn test_missing_license_file_is_not_found() {
    let root = TempDir::new().unwrap();
    let sub = Substituter::new(&[]).unwrap();

    let result = instantiate_license(
        &root.path().join("NO_SUCH_LICENSE"),
        &root.path().join("COPYING"),
        &sub,
    );

    match result {
        Err(Error::LicenseNotFound { .. }) => (),
        other => panic!("expected LicenseNotFound, got {:?}", other),
    }
}

#[test]
fn test_available_licenses_are_sorted() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("MIT"), "").unwrap();
    fs::write(root.path().join("Apache-2.0"), "").unwrap();
    fs::write(root.path().join("BSD-2-Clause"), "").unwrap();
    fs::create_dir(root.path().join("subdir")).unwrap();

    let names = available_licenses(root.path()).unwrap();
    assert_eq!(names, vec!["Apache-2.0", "BSD-2-Clause", "MIT"]);
}

#[test]
fn test_missing_license_dir_yields_empty_list() {
    let root = TempDir::new().unwrap();
    let names = available_licenses(&root.path().join("nowhere")).unwrap();
    assert!(names.is_empty());
}
