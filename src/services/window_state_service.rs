//! Persistence of the main window geometry between sessions.
//!
//! The state lives in `window-state.json` under the platform config
//! directory. A missing or unreadable file falls back to an 800x600 window
//! placed by the OS.

use crate::config::{
    APP_DIR_NAME, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, WINDOW_STATE_FILE,
};
use crate::error::{AppError, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A window rectangle in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            maximized: false,
        }
    }
}

impl WindowState {
    /// Position only when both coordinates were stored.
    pub fn position(&self) -> Option<(i32, i32)> {
        self.x.zip(self.y)
    }
}

/// Placement targets for the Ctrl+Alt+arrow shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapLayout {
    LeftHalf,
    RightHalf,
    /// Default size, centered on the monitor.
    Centered,
}

impl SnapLayout {
    /// Computes target bounds inside the given monitor rectangle.
    pub fn bounds_within(self, monitor: Bounds) -> Bounds {
        let half = monitor.width / 2;
        match self {
            SnapLayout::LeftHalf => Bounds {
                x: monitor.x,
                y: monitor.y,
                width: half,
                height: monitor.height,
            },
            SnapLayout::RightHalf => Bounds {
                x: monitor.x + half as i32,
                y: monitor.y,
                width: half,
                height: monitor.height,
            },
            SnapLayout::Centered => {
                let width = DEFAULT_WINDOW_WIDTH.min(monitor.width);
                let height = DEFAULT_WINDOW_HEIGHT.min(monitor.height);
                Bounds {
                    x: monitor.x + ((monitor.width - width) / 2) as i32,
                    y: monitor.y + ((monitor.height - height) / 2) as i32,
                    width,
                    height,
                }
            }
        }
    }
}

fn default_state_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR_NAME);
        path.push(WINDOW_STATE_FILE);
        path
    })
}

/// The last saved geometry; `None` when nothing usable was saved.
pub fn load() -> Option<WindowState> {
    let path = default_state_path()?;
    if !path.exists() {
        return None;
    }

    match load_from_path(&path) {
        Ok(state) => {
            info!("Restored window state from {:?}", path);
            Some(state)
        }
        Err(e) => {
            warn!("Ignoring window state at {:?}: {}", path, e);
            None
        }
    }
}

pub fn save(state: &WindowState) -> Result<()> {
    if let Some(path) = default_state_path() {
        return save_to_path(state, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<WindowState> {
    let content =
        fs::read_to_string(path).map_err(|e| AppError::WindowState(e.to_string()))?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_to_path(state: &WindowState, path: &Path) -> Result<()> {
    let content = serde_json::to_string(state)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::WindowState(e.to_string()))?;
    }
    fs::write(path, content).map_err(|e| AppError::WindowState(e.to_string()))
}
