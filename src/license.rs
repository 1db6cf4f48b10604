//! License instantiation.
//! Applies the same token substitution to a single license template file
//! and writes the result into the new project. Unlike the template tree
//! there is no renaming step; the output file name is fixed.

use crate::error::{Error, Result};
use crate::substitute::Substituter;
use std::fs;
use std::path::Path;

/// Renders `license_file` through the substituter and writes it at
/// `destination` as UTF-8 text.
///
/// # Errors
/// * `Error::LicenseNotFound` if `license_file` does not exist
/// * `Error::Io` for read/write failures
pub fn instantiate_license(
    license_file: &Path,
    destination: &Path,
    substituter: &Substituter,
) -> Result<()> {
    if !license_file.is_file() {
        return Err(Error::LicenseNotFound {
            path: license_file.display().to_string(),
        });
    }

    let text = fs::read_to_string(license_file).map_err(Error::Io)?;
    let rendered = substituter.apply(&text);

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(Error::Io)?;
    }
    fs::write(destination, rendered).map_err(Error::Io)
}

/// Lists the license template names available under `license_dir`,
/// sorted for display. A missing directory yields an empty list.
pub fn available_licenses(license_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let entries = match fs::read_dir(license_dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(names),
    };
    for entry in entries {
        let entry = entry.map_err(Error::Io)?;
        if entry.file_type().map_err(Error::Io)?.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
