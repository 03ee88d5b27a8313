use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Puzzle gravity interval in milliseconds.
    pub tick_ms: u64,
    /// Stroke width the paint screen starts with.
    pub brush_width: u16,
    pub max_brush_width: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            brush_width: 5,
            max_brush_width: 100,
        }
    }
}

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("paintris");
    path.push("settings.json");
    path
}

impl Settings {
    pub fn load() -> Self {
        match fs::read_to_string(settings_path()) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(data) = serde_json::to_string_pretty(self) {
            let _ = fs::write(&path, data);
        }
    }
}
