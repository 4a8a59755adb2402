// src/templates.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the SQL text for a named query from the template store.
///
/// Templates are re-read from disk on every request, so edits land without
/// a restart. A missing file is an error carrying the attempted path.
pub fn load(sql_dir: &Path, name: &str) -> Result<String> {
    let path = sql_dir.join(format!("{name}.sql"));
    fs::read_to_string(&path)
        .with_context(|| format!("SQL template not found: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::load;

    #[test]
    fn reads_template_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cities.sql"), "SELECT 1").unwrap();

        let sql = load(dir.path(), "cities").unwrap();
        assert_eq!(sql, "SELECT 1");
    }

    #[test]
    fn missing_template_names_the_path() {
        let dir = tempfile::tempdir().unwrap();

        let err = load(dir.path(), "nope").unwrap_err();
        assert!(err.to_string().contains("nope.sql"));
    }
}
