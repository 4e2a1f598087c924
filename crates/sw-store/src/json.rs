//! JSON save files.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreResult;

/// Write a value to `path` as pretty-printed JSON.
///
/// Non-ASCII text is written as-is, so save files stay readable.
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> StoreResult<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    Ok(())
}

/// Read a value back from a JSON file.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> StoreResult<T> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a value back from a JSON file, or produce the default when the
/// file does not exist yet.
///
/// A present-but-broken file is still an error; only absence is treated
/// as a fresh start.
pub fn load_json_or_default<T>(path: impl AsRef<Path>) -> StoreResult<T>
where
    T: DeserializeOwned + Default,
{
    match fs::read_to_string(path) {
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct SaveGame {
        hero: String,
        gold: u32,
        visited: Vec<String>,
    }

    fn sample() -> SaveGame {
        SaveGame {
            hero: "Mira".to_string(),
            gold: 120,
            visited: vec!["Tavern".to_string(), "Crypt".to_string()],
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        save_json(&path, &sample()).unwrap();
        let loaded: SaveGame = load_json(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn saved_file_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        save_json(&path, &sample()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"hero\""));
    }

    #[test]
    fn non_ascii_text_survives_unescaped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        save_json(&path, &"Weiß der Wanderer".to_string()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Weiß der Wanderer"));
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let result: StoreResult<SaveGame> = load_json(dir.path().join("absent.json"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let loaded: SaveGame = load_json_or_default(dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, SaveGame::default());
    }

    #[test]
    fn load_or_default_still_rejects_broken_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "not json at all").unwrap();
        let result: StoreResult<SaveGame> = load_json_or_default(&path);
        assert!(matches!(result, Err(StoreError::Json(_))));
    }
}
