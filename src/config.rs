//! Application configuration constants.

use std::time::Duration;

/// Supported image file extensions for scanning directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Extension declared in the inline payload when the file has none.
/// Only the label changes, never the bytes.
pub const FALLBACK_MIME_EXTENSION: &str = "png";

/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "PhotoViewerLite";

pub const WINDOW_STATE_FILE: &str = "window-state.json";

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// Toasts visible at once; the oldest is evicted first.
pub const MAX_NOTIFICATIONS: usize = 3;

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(4000);
