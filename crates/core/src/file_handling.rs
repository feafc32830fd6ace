//! Reading the parameter catalog from disk.

use std::fs::File;
use std::path::Path;

use log::info;

use crate::catalog::Catalog;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads and validates the catalog at `catalog_path`.
///
/// When the file does not exist and `required` is false, the built-in
/// catalog is returned instead.
///
/// # Errors
///
/// Returns an error if:
/// - The file is required but missing, or cannot be read
/// - The YAML is malformed or doesn't match the catalog structure
/// - A parameter has no candidates, or an image name is blank
pub fn get_catalog(catalog_path: &str, required: bool) -> Result<Catalog> {
    if !required && !Path::exists(Path::new(catalog_path)) {
        info!("No catalog at `{catalog_path}`, using the built-in catalog.");
        return Ok(Catalog::builtin());
    }

    let catalog_reader = get_reader("catalog", catalog_path)?;

    let catalog: Catalog = serde_yaml::from_reader(catalog_reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "catalog".to_string(),
            catalog_path.to_string(),
            e,
        )
    })?;

    catalog.validate()?;

    info!(
        "Loaded catalog from `{catalog_path}` with {} images",
        catalog.images.len()
    );

    Ok(catalog)
}
