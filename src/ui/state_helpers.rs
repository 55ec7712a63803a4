//! Helper functions to set multiple ViewerState properties in a grouped manner.
//!
//! Instead of calling individual setters like set_current_filename, set_file_size_formatted, etc.,
//! these functions group related properties together for better code organization and maintainability.

use crate::services::Notification;
use slint::ComponentHandle;

/// Sets all file information properties at once.
///
/// Groups: current-filename, current-path, file-size-formatted, image-width, image-height
pub fn set_file_info(
    ui: &crate::AppWindow,
    filename: &str,
    path: &str,
    file_size: &str,
    width: u32,
    height: u32,
) {
    let viewer_state = ui.global::<crate::ViewerState>();
    viewer_state.set_current_filename(filename.into());
    viewer_state.set_current_path(path.into());
    viewer_state.set_file_size_formatted(file_size.into());
    viewer_state.set_image_width(width as i32);
    viewer_state.set_image_height(height as i32);
}

/// Sets the displayed image, or an empty one when it could not be decoded.
pub fn set_displayed_image(ui: &crate::AppWindow, image: Option<slint::Image>) {
    let viewer_state = ui.global::<crate::ViewerState>();
    viewer_state.set_dynamic_image(image.unwrap_or_default());
    viewer_state.set_image_loaded(true);
}

/// Sets all navigation-related properties at once.
///
/// Groups: current-index (1-based, 0 when not navigable), total-index
pub fn set_navigation_info(ui: &crate::AppWindow, index: Option<usize>, total: usize) {
    let viewer_state = ui.global::<crate::ViewerState>();
    viewer_state.set_current_index(index.map(|i| i as i32 + 1).unwrap_or(0));
    viewer_state.set_total_index(total as i32);
}

/// Shows window position and size in the status bar.
pub fn set_status(ui: &crate::AppWindow, x: i32, y: i32, width: u32, height: u32) {
    ui.global::<crate::ViewerState>()
        .set_status_text(format!("Position: {},{} | {}x{}", x, y, width, height).into());
}

/// Replaces the toast list with the given notifications, oldest first.
pub fn set_notifications<'a>(
    ui: &crate::AppWindow,
    notifications: impl Iterator<Item = &'a Notification>,
) {
    let toasts: Vec<crate::Toast> = notifications
        .map(|n| crate::Toast {
            id: n.id as i32,
            severity: n.severity.to_string().into(),
            title: n.title.as_str().into(),
            message: n.message.as_str().into(),
        })
        .collect();
    ui.global::<crate::ViewerState>()
        .set_notifications(slint::ModelRc::new(slint::VecModel::from(toasts)));
}
