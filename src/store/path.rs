use crate::error::ConfigError;
use anyhow::Result;
use directories::BaseDirs;
use std::path::PathBuf;

pub const STORE_FILE_NAME: &str = "pathlist.json";

pub fn home_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or(ConfigError)?;
    Ok(base_dirs.home_dir().to_path_buf())
}

pub fn resolve_store_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    Ok(home_dir()?.join(STORE_FILE_NAME))
}
