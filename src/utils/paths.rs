use anyhow::{anyhow, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable that relocates the whole app directory.
pub const HOME_ENV_VAR: &str = "EMAIL_CHECKLIST_HOME";

pub fn get_app_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(HOME_ENV_VAR)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".email-checklist"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

pub fn get_database_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("state.db"))
}

pub fn get_log_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("email-checklist.log"))
}

pub fn ensure_app_dir_exists() -> Result<()> {
    let dir = get_app_dir()?;

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(())
}
