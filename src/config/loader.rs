//! Configuration loading utilities.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::schema::Config;

/// Get the default configuration file path (`~/.structbench/config.json`).
pub fn get_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".structbench").join("config.json")
}

/// Load configuration from a file, or return a default [`Config`] if the
/// file does not exist or cannot be parsed.
///
/// If `config_path` is `None`, the default path
/// (`~/.structbench/config.json`) is used.
pub fn load_config(config_path: Option<&Path>) -> Config {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => get_config_path(),
    };

    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Config>(&contents) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    warn!(
                        "Failed to parse config from {}: {}. Using default configuration.",
                        path.display(),
                        e
                    );
                }
            },
            Err(e) => {
                warn!(
                    "Failed to read config from {}: {}. Using default configuration.",
                    path.display(),
                    e
                );
            }
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_returns_default() {
        let path = Path::new("/tmp/structbench_test_does_not_exist_987654.json");
        let cfg = load_config(Some(path));
        assert_eq!(cfg.runs, 10);
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = std::env::temp_dir().join("structbench_test_loader");
        let _ = fs::create_dir_all(&dir);
        let tmp_path = dir.join("config_roundtrip.json");

        let cfg = Config {
            models: vec!["qwen/qwen3-4b-thinking-2507".to_string()],
            runs: 3,
            api_url: "http://localhost:9999/v1/chat/completions".to_string(),
            timeout_secs: 5,
        };
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        fs::write(&tmp_path, json).unwrap();

        let loaded = load_config(Some(&tmp_path));
        assert_eq!(loaded.models, cfg.models);
        assert_eq!(loaded.runs, 3);
        assert_eq!(loaded.api_url, cfg.api_url);

        // Clean up.
        let _ = fs::remove_file(&tmp_path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_load_garbage_returns_default() {
        let dir = std::env::temp_dir().join("structbench_test_loader_garbage");
        let _ = fs::create_dir_all(&dir);
        let tmp_path = dir.join("config_garbage.json");
        fs::write(&tmp_path, "not json at all {{{").unwrap();

        let cfg = load_config(Some(&tmp_path));
        assert_eq!(cfg.timeout_secs, 40);

        let _ = fs::remove_file(&tmp_path);
        let _ = fs::remove_dir(&dir);
    }
}
