use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use pizza_core::{load_menu, Menu};
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

pub const CONFIG_FILE: &str = "pizza-menu.yaml";
pub const DEFAULT_MENU_FILE: &str = "PizzaMenu.txt";

/// Shop configuration from pizza-menu.yaml.
#[derive(Debug, Default, Deserialize)]
pub struct MenuConfig {
    pub shop: Option<String>,
    pub menu: Option<String>,
    pub menus: Option<Vec<String>>,
}

/// Read the shop config next to (or inside) a path, if one exists.
pub fn read_config(input_path: &Path) -> Result<MenuConfig, CliError> {
    let dir = if input_path.is_dir() {
        input_path
    } else {
        match input_path.parent() {
            Some(parent) => parent,
            None => return Ok(MenuConfig::default()),
        }
    };

    let config_path = dir.join(CONFIG_FILE);
    if !config_path.is_file() {
        return Ok(MenuConfig::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|e| CliError::Config {
        path: config_path.display().to_string(),
        reason: e.to_string(),
    })?;
    let config: MenuConfig = serde_yaml::from_str(&content).map_err(|e| CliError::Config {
        path: config_path.display().to_string(),
        reason: e.to_string(),
    })?;
    debug!(path = %config_path.display(), "read shop config");
    Ok(config)
}

/// Resolve the single menu file a path refers to. A directory means its
/// configured menu, or `PizzaMenu.txt` when there is no config.
pub fn resolve_menu_path(input_path: &Path, config: &MenuConfig) -> PathBuf {
    if input_path.is_dir() {
        let file = config.menu.as_deref().unwrap_or(DEFAULT_MENU_FILE);
        input_path.join(file)
    } else {
        input_path.to_path_buf()
    }
}

/// Collect every menu file under a path for validation.
pub fn find_menu_files(input_path: &Path, config: &MenuConfig) -> Result<Vec<PathBuf>, CliError> {
    if !input_path.exists() {
        return Err(CliError::Open {
            path: input_path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "path does not exist"),
        });
    }

    if input_path.is_file() {
        return Ok(vec![input_path.to_path_buf()]);
    }

    match config.menus {
        Some(ref patterns) if !patterns.is_empty() => glob_patterns(input_path, patterns),
        _ => glob_patterns(input_path, &["**/*.txt".to_string()]),
    }
}

fn glob_patterns(base_dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, CliError> {
    let mut paths: Vec<PathBuf> = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for pattern in patterns {
        let full_pattern = base_dir.join(pattern);
        let pattern_str = full_pattern.to_string_lossy().replace('\\', "/");
        let entries = glob::glob(&pattern_str)
            .map_err(|e| CliError::Usage(format!("Invalid glob pattern '{pattern}': {e}")))?;

        let mut matched: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| CliError::Open {
                path: e.path().display().to_string(),
                source: e.into_error(),
            })?;
            if path.is_file() && seen.insert(path.clone()) {
                matched.push(path);
            }
        }
        matched.sort();
        paths.extend(matched);
    }

    Ok(paths)
}

/// Open a menu file and load it into a fresh menu.
pub fn load_menu_file(path: &Path) -> Result<Menu, CliError> {
    let file = File::open(path).map_err(|e| CliError::Open {
        path: path.display().to_string(),
        source: e,
    })?;
    debug!(path = %path.display(), "loading menu");
    load_menu(BufReader::new(file)).map_err(|e| CliError::Menu {
        file: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_is_used_as_is() {
        let config = MenuConfig::default();
        let path = Path::new("some/where/menu.txt");
        assert_eq!(resolve_menu_path(path, &config), path.to_path_buf());
    }

    #[test]
    fn config_parses_from_yaml() {
        let config: MenuConfig =
            serde_yaml::from_str("shop: Luigi's\nmenu: Main.txt\nmenus:\n  - \"*.txt\"\n").unwrap();
        assert_eq!(config.shop.as_deref(), Some("Luigi's"));
        assert_eq!(config.menu.as_deref(), Some("Main.txt"));
        assert_eq!(config.menus, Some(vec!["*.txt".to_string()]));
    }

    #[test]
    fn missing_file_is_open_error() {
        let err = load_menu_file(Path::new("definitely/not/here/PizzaMenu.txt")).unwrap_err();
        assert!(matches!(err, CliError::Open { .. }));
        assert_eq!(err.exit_code(), crate::error::exit::COULD_NOT_OPEN_FILE);
    }
}
