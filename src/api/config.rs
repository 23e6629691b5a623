use std::path::{ Path, PathBuf };
use crate::api::error::ConfigError;

/// Reads an environment (or `.env`) variable, treating blank values as unset.
pub fn optional_var(name: &str) -> Option<String> {
    dotenv::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Resolves a configured path; relative paths are taken from the home directory.
pub fn resolve_path(configured_path: &str) -> Result<PathBuf, ConfigError> {
    let path = Path::new(configured_path);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let home_dir = dirs::home_dir().ok_or(ConfigError::MissingHomeDirectory)?;
    Ok(home_dir.join(path))
}

/// Reads a file that may legitimately not exist yet.
pub fn read_optional_file(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Io { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_kept() {
        let absolute = std::env::temp_dir().join("recipes.json");
        assert_eq!(resolve_path(absolute.to_str().unwrap()).unwrap(), absolute);
    }

    #[test]
    fn missing_files_read_as_none() {
        let directory = tempfile::tempdir().unwrap();
        assert_eq!(read_optional_file(&directory.path().join("missing.json")).unwrap(), None);
    }
}
