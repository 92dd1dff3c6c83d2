use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use shared::domain::GameMode;

pub const DEFAULT_CONFIG_FILE: &str = "roundhouse.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub enabled_modes: Vec<GameMode>,
    pub rng_seed: Option<u64>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled_modes: GameMode::ALL.to_vec(),
            rng_seed: None,
            log_filter: "info".into(),
        }
    }
}

/// Settings plus the values that were rejected while loading them. Logging is
/// configured from these settings, so rejections are reported afterwards.
#[derive(Debug, Default)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub ignored: Vec<String>,
}

/// Defaults, then the config file, then environment overrides.
///
/// A missing default `roundhouse.toml` is fine; an explicitly named file that
/// cannot be read or parsed is an error.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<LoadedSettings> {
    let mut loaded = LoadedSettings::default();

    let path = explicit_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    match fs::read_to_string(&path) {
        Ok(raw) => {
            let table = raw
                .parse::<toml::Table>()
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            apply_file_table(&mut loaded, &table);
        }
        Err(err) if explicit_path.is_some() => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
        Err(_) => {}
    }

    apply_env_overrides(&mut loaded, |key| std::env::var(key).ok());
    Ok(loaded)
}

fn apply_file_table(loaded: &mut LoadedSettings, table: &toml::Table) {
    if let Some(value) = table.get("enabled_modes") {
        let raw: Option<Vec<String>> = match value {
            toml::Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect(),
            toml::Value::String(list) => Some(split_list(list)),
            _ => None,
        };
        match raw {
            Some(raw) => set_enabled_modes(loaded, &raw, "enabled_modes"),
            None => loaded
                .ignored
                .push("enabled_modes must be a list of game mode ids".to_string()),
        }
    }

    if let Some(value) = table.get("rng_seed") {
        match value.as_integer().and_then(|seed| u64::try_from(seed).ok()) {
            Some(seed) => loaded.settings.rng_seed = Some(seed),
            None => loaded
                .ignored
                .push(format!("rng_seed must be a non-negative integer, got {value}")),
        }
    }

    if let Some(value) = table.get("log_filter") {
        match value.as_str() {
            Some(filter) => loaded.settings.log_filter = filter.to_string(),
            None => loaded.ignored.push("log_filter must be a string".to_string()),
        }
    }
}

fn apply_env_overrides(loaded: &mut LoadedSettings, var: impl Fn(&str) -> Option<String>) {
    for key in ["ROUNDHOUSE_SEED", "APP__RNG_SEED"] {
        if let Some(v) = var(key) {
            match v.trim().parse::<u64>() {
                Ok(seed) => loaded.settings.rng_seed = Some(seed),
                Err(_) => loaded.ignored.push(format!("{key}={v:?} is not a seed")),
            }
        }
    }

    if let Some(v) = var("APP__ENABLED_MODES") {
        set_enabled_modes(loaded, &split_list(&v), "APP__ENABLED_MODES");
    }

    if let Some(v) = var("RUST_LOG") {
        loaded.settings.log_filter = v;
    }
    if let Some(v) = var("APP__LOG_FILTER") {
        loaded.settings.log_filter = v;
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn set_enabled_modes(loaded: &mut LoadedSettings, raw: &[String], origin: &str) {
    let mut modes = Vec::new();
    for id in raw {
        match id.parse::<GameMode>() {
            Ok(mode) if !modes.contains(&mode) => modes.push(mode),
            Ok(_) => {}
            Err(err) => loaded.ignored.push(format!("{origin}: {err}")),
        }
    }

    if modes.is_empty() {
        loaded
            .ignored
            .push(format!("{origin} selects no known game modes; keeping the full catalog"));
        return;
    }
    loaded.settings.enabled_modes = modes;
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
