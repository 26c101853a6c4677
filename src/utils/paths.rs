use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

pub fn get_data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".local").join("share").join("clipGo"))
}

pub fn get_history_file_path() -> Result<PathBuf> {
    let data_dir = get_data_dir()?;
    Ok(data_dir.join("clipGo.json"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let data_dir = get_data_dir()?;
    Ok(data_dir.join("config.toml"))
}

pub fn ensure_directories_exist() -> Result<()> {
    let data_dir = get_data_dir()?;

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_data_dir() {
        let dir = get_data_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".local"));
        assert!(dir.to_string_lossy().ends_with("clipGo"));
    }

    #[test]
    fn test_get_history_file_path() {
        let path = get_history_file_path().unwrap();
        assert!(path.to_string_lossy().contains("clipGo"));
        assert!(path.to_string_lossy().ends_with("clipGo.json"));
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains("clipGo"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
