use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::utils::error::AppError;

/// Loads a collection document. An absent file yields the empty default; a
/// file that cannot be read or parsed is reported and the default returned.
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return T::default();
    }
    let loaded = fs::read(path)
        .map_err(AppError::from)
        .and_then(|bytes| serde_json::from_slice(&bytes).map_err(AppError::from));
    match loaded {
        Ok(value) => value,
        Err(err) => {
            err.log();
            T::default()
        }
    }
}

/// Rewrites the whole document in place.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let bytes = serde_json::to_vec_pretty(value)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// A failed write is reported and otherwise ignored; the in-memory
/// collection stays ahead of disk.
pub fn save_or_report<T: Serialize>(path: &Path, value: &T) {
    if let Err(err) = save(path, value) {
        err.log();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn absent_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let map: BTreeMap<u64, String> = load_or_default(&dir.path().join("missing.json"));
        assert!(map.is_empty());
    }

    #[test]
    fn corrupt_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, b"not json at all").unwrap();

        let map: BTreeMap<u64, String> = load_or_default(&path);
        assert!(map.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let mut map = BTreeMap::new();
        map.insert(1u64, "one".to_string());
        map.insert(2u64, "two".to_string());

        save(&path, &map).unwrap();
        let reloaded: BTreeMap<u64, String> = load_or_default(&path);

        assert_eq!(reloaded, map);
    }
}
