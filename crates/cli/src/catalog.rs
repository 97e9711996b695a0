//! Material catalog ingestion.
//!
//! Catalogs come from warehouse spreadsheet exports: a delimited text file
//! (comma or tab separated) with a header row and `Material, Length, Width,
//! Height` columns, or a JSON array of the same records. Malformed rows are
//! skipped with a warning, never fatal; rejecting bad dimensions is the
//! planner's job.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use u_stacking_core::Material;

/// Errors that can occur when loading catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Loader for material catalog files.
#[derive(Debug, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Creates a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Loads a catalog from a file, dispatching on the extension:
    /// `.json` is parsed as a JSON array, everything else as delimited text.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Vec<Material>, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            self.parse_json(&content)
        } else {
            Ok(self.parse_delimited(&content))
        }
    }

    /// Parses a delimited text catalog.
    ///
    /// The first line is the header and is skipped. Each data line splits on
    /// tabs when it contains any, otherwise on commas. Rows with fewer than
    /// four fields or non-numeric dimensions are skipped with a warning; row
    /// ids count from 1 at the first data line, matching the source
    /// spreadsheet's row numbers.
    pub fn parse_delimited(&self, text: &str) -> Vec<Material> {
        let mut materials = Vec::new();

        for (index, line) in text.lines().enumerate().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = if line.contains('\t') {
                line.split('\t').collect()
            } else {
                line.split(',').collect()
            };

            if fields.len() < 4 {
                log::warn!(
                    "Skipping row {}: expected 4 fields, got {}",
                    index,
                    fields.len()
                );
                continue;
            }

            let name = fields[0].trim();
            let name = if name.is_empty() { "Unknown" } else { name };

            let dims = (
                fields[1].trim().parse::<f64>(),
                fields[2].trim().parse::<f64>(),
                fields[3].trim().parse::<f64>(),
            );
            let (length, width, height) = match dims {
                (Ok(l), Ok(w), Ok(h)) => (l, w, h),
                _ => {
                    log::warn!("Skipping row {}: non-numeric dimensions", index);
                    continue;
                }
            };

            materials.push(
                Material::new(format!("row-{}", index), length, width, height).with_name(name),
            );
        }

        materials
    }

    /// Parses a JSON catalog: an array of records with `name`, `length`,
    /// `width`, `height` and an optional `id`.
    pub fn parse_json(&self, json: &str) -> Result<Vec<Material>, CatalogError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;

        Ok(raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let id = entry
                    .id
                    .unwrap_or_else(|| format!("row-{}", index + 1));
                Material::new(id, entry.length, entry.width, entry.height).with_name(entry.name)
            })
            .collect())
    }
}

/// Raw catalog record as parsed from JSON.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<String>,
    name: String,
    length: f64,
    width: f64,
    height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let text = "Material,Length,Width,Height\n\
                    Carton A,400,300,200\n\
                    Carton B,350.5,270,180\n";

        let loader = CatalogLoader::new();
        let materials = loader.parse_delimited(text);

        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].id(), "row-1");
        assert_eq!(materials[0].name(), "Carton A");
        assert_eq!(materials[0].length(), 400.0);
        assert_eq!(materials[1].id(), "row-2");
        assert_eq!(materials[1].width(), 270.0);
    }

    #[test]
    fn test_parse_tsv() {
        let text = "Material\tLength\tWidth\tHeight\n\
                    Carton A\t400\t300\t200\n";

        let materials = CatalogLoader::new().parse_delimited(text);

        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].name(), "Carton A");
        assert_eq!(materials[0].height(), 200.0);
    }

    #[test]
    fn test_short_rows_skipped() {
        let text = "Material,Length,Width,Height\n\
                    Carton A,400,300,200\n\
                    Broken,400,300\n\
                    Carton B,350,270,180\n";

        let materials = CatalogLoader::new().parse_delimited(text);

        assert_eq!(materials.len(), 2);
        // Row ids follow source line numbers, so the skip leaves a gap
        assert_eq!(materials[0].id(), "row-1");
        assert_eq!(materials[1].id(), "row-3");
    }

    #[test]
    fn test_non_numeric_rows_skipped() {
        let text = "Material,Length,Width,Height\n\
                    Carton A,400,n/a,200\n\
                    Carton B,350,270,180\n";

        let materials = CatalogLoader::new().parse_delimited(text);

        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].name(), "Carton B");
    }

    #[test]
    fn test_blank_name_defaults() {
        let text = "Material,Length,Width,Height\n\
                    ,400,300,200\n";

        let materials = CatalogLoader::new().parse_delimited(text);

        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].name(), "Unknown");
    }

    #[test]
    fn test_blank_lines_ignored() {
        let text = "Material,Length,Width,Height\n\
                    \n\
                    Carton A,400,300,200\n\
                    \n";

        let materials = CatalogLoader::new().parse_delimited(text);
        assert_eq!(materials.len(), 1);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let text = "Material,Length,Width,Height\n\
                    Carton A , 400 , 300 , 200\n";

        let materials = CatalogLoader::new().parse_delimited(text);

        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].name(), "Carton A");
        assert_eq!(materials[0].length(), 400.0);
    }

    #[test]
    fn test_parse_json_catalog() {
        let json = r#"[
            {"name": "Carton A", "length": 400, "width": 300, "height": 200},
            {"id": "SKU-7", "name": "Carton B", "length": 350, "width": 270, "height": 180}
        ]"#;

        let materials = CatalogLoader::new().parse_json(json).unwrap();

        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].id(), "row-1");
        assert_eq!(materials[1].id(), "SKU-7");
        assert_eq!(materials[1].name(), "Carton B");
    }

    #[test]
    fn test_parse_json_invalid() {
        let loader = CatalogLoader::new();
        assert!(loader.parse_json("not json").is_err());
        assert!(loader.parse_json(r#"[{"name": "x"}]"#).is_err());
    }
}
