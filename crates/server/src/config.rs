use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::Roster;

use crate::api::default_roster;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub seed_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8000".into(),
            seed_path: None,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file_settings(&mut settings, &raw);
    }
    apply_env_settings(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file_settings(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("seed_path") {
        settings.seed_path = Some(PathBuf::from(v));
    }
}

fn apply_env_settings(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = lookup("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = lookup("APP__SEED_PATH") {
        let v = v.trim();
        settings.seed_path = (!v.is_empty()).then(|| PathBuf::from(v));
    }
}

/// Roster the server starts with: the JSON file at `seed_path` when set,
/// otherwise the built-in activities.
pub fn load_seed_roster(settings: &Settings) -> anyhow::Result<Roster> {
    match settings.seed_path.as_deref() {
        Some(path) => read_roster_file(path),
        None => Ok(default_roster()),
    }
}

fn read_roster_file(path: &Path) -> anyhow::Result<Roster> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed roster '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("seed roster '{}' is not a valid activity map", path.display()))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
