use crate::error::FileError;
use antmaze_colony::SearchSettings;
use log::info;
use std::fs;
use std::path::Path;

pub fn load_settings(path: &Path) -> Result<SearchSettings, FileError> {
    let text = fs::read_to_string(path).map_err(|e| FileError::io(path, e))?;
    let settings: SearchSettings =
        serde_json::from_str(&text).map_err(|source| FileError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
    info!("loaded settings from {}", path.display());
    Ok(settings)
}
