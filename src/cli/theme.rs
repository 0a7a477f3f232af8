use anyhow::{Context, Result, anyhow};
use crossterm::style::Color;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliThemeConfig {
    pub enabled: bool,
    pub header: String,
    pub name: String,
    pub path: String,
}

impl Default for CliThemeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            header: "Yellow".to_string(),
            name: "Cyan".to_string(),
            path: "Green".to_string(),
        }
    }
}

pub struct CliTheme {
    pub enabled: bool,
    pub header: Color,
    pub name: Color,
    pub path: Color,
}

impl CliTheme {
    fn from_config(config: CliThemeConfig) -> Self {
        Self {
            enabled: config.enabled,
            header: parse_color(&config.header),
            name: parse_color(&config.name),
            path: parse_color(&config.path),
        }
    }

    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::from_config(CliThemeConfig::default())
        }
    }
}

pub fn load_cli_theme(override_path: Option<PathBuf>) -> Result<CliTheme> {
    let path = resolve_cli_theme_path(override_path)?;
    if let Some(path) = path {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("unable to read {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("unable to parse {}", path.display()))?;
        return Ok(CliTheme::from_config(config));
    }
    Ok(CliTheme::from_config(CliThemeConfig::default()))
}

fn resolve_cli_theme_path(override_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = override_path {
        return Ok(Some(path));
    }

    let project_dirs = ProjectDirs::from("", "", "see")
        .ok_or_else(|| anyhow!("unable to resolve config directory"))?;
    let candidate = project_dirs.config_dir().join("cli.json");
    if candidate.exists() {
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}

fn parse_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::DarkRed,
        "green" => Color::DarkGreen,
        "yellow" => Color::DarkYellow,
        "blue" => Color::DarkBlue,
        "magenta" => Color::DarkMagenta,
        "cyan" => Color::DarkCyan,
        "gray" | "grey" => Color::Grey,
        "darkgray" | "dark_gray" | "darkgrey" => Color::DarkGrey,
        "lightred" | "light_red" => Color::Red,
        "lightgreen" | "light_green" => Color::Green,
        "lightyellow" | "light_yellow" => Color::Yellow,
        "lightblue" | "light_blue" => Color::Blue,
        "lightmagenta" | "light_magenta" => Color::Magenta,
        "lightcyan" | "light_cyan" => Color::Cyan,
        _ => Color::White,
    }
}
