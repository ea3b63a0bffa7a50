//! `data.json` read/write.
//!
//! The file is a pretty-printed JSON array (two-space indent, non-ASCII text
//! written literally, no trailing newline). Writes go to a temporary file in
//! the target directory which is then renamed over the target, so readers
//! see either the old catalog or the new one.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::model::ProjectRecord;

/// Serialize `value` the way the catalog file is laid out on disk.
pub fn to_catalog_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn read_value(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_records(path: &Path) -> Result<Vec<ProjectRecord>> {
    let text = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let body = to_catalog_json(value)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| CatalogError::io(dir, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| CatalogError::io(dir, e))?;
    tmp.write_all(body.as_bytes())
        .and_then(|()| carry_permissions(tmp.as_file(), path))
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| CatalogError::io(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| CatalogError::io(path, e.error))?;

    debug!(path = %path.display(), bytes = body.len(), "wrote catalog file");
    Ok(())
}

/// Temp files are created owner-only; give the replacement the target's
/// mode, or a world-readable one for a fresh file.
fn carry_permissions(file: &fs::File, target: &Path) -> std::io::Result<()> {
    match fs::metadata(target) {
        Ok(meta) => file.set_permissions(meta.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => default_permissions(file),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn default_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

pub fn write_records(path: &Path, records: &[ProjectRecord]) -> Result<()> {
    write_json(path, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> ProjectRecord {
        ProjectRecord {
            id: 1_000_000_000,
            category: "08-40套-小程序".to_string(),
            short_category: "小程序".to_string(),
            name: "小程序001智能留言板".to_string(),
            tags: vec!["小程序".to_string(), "微信".to_string()],
            link: "https://example.com/dl".to_string(),
        }
    }

    #[test]
    fn layout_is_two_space_indented_and_unescaped() {
        let text = to_catalog_json(&[sample()]).unwrap();
        let expected = r#"[
  {
    "id": 1000000000,
    "category": "08-40套-小程序",
    "short_category": "小程序",
    "name": "小程序001智能留言板",
    "tags": [
      "小程序",
      "微信"
    ],
    "link": "https://example.com/dl"
  }
]"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "stale").unwrap();

        write_records(&path, &[sample()]).unwrap();
        assert_eq!(read_records(&path).unwrap(), vec![sample()]);

        // no temp files left behind
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn write_creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/data.json");
        write_records(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[cfg(unix)]
    #[test]
    fn fresh_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        write_records(&path, &[sample()]).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let dir = tempdir().unwrap();
        let err = read_value(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn malformed_json_maps_to_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[{\"id\": 1,").unwrap();
        assert!(matches!(
            read_value(&path).unwrap_err(),
            CatalogError::Parse { .. }
        ));
    }
}
