//! `Logic` callbacks of the main window.
//!
//! The file dialog runs on the UI thread; its pick and every next/previous
//! press are handed to the ordered navigation worker. Window actions run
//! directly on the UI thread.

use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::services::{Notification, SnapLayout};
use crate::state::{AppState, Direction};
use crate::ui::{notifications, window_controls};
use log::{debug, error, warn};
use rfd::AsyncFileDialog;
use slint::ComponentHandle;

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and shared application state, then registers
/// callbacks for image selection, navigation, and window actions.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState) {
    let logic = ui.global::<crate::Logic>();

    // Image selection handler
    // Uses slint::spawn_local because AsyncFileDialog must run on the main thread
    logic.on_open_image({
        let navigator = state.navigator.clone();
        move || {
            let navigator = navigator.clone();
            let spawned = slint::spawn_local(async move {
                let Some(file_handle) = AsyncFileDialog::new()
                    .add_filter("Images", &SUPPORTED_IMAGE_EXTENSIONS)
                    .pick_file()
                    .await
                else {
                    debug!("File dialog cancelled");
                    return;
                };

                navigator.open(file_handle.path().to_path_buf());
            });
            if let Err(e) = spawned {
                error!("Failed to show file dialog: {}", e);
            }
        }
    });

    logic.on_next_image({
        let navigator = state.navigator.clone();
        move || navigator.navigate(Direction::Next)
    });

    logic.on_prev_image({
        let navigator = state.navigator.clone();
        move || navigator.navigate(Direction::Previous)
    });

    // Preview is created on the UI thread; the replay runs on a worker
    // so a load in progress does not block the event loop.
    logic.on_toggle_preview({
        let ui_handle = ui.as_weak();
        let queue = state.notifications.clone();
        let preview = state.preview.clone();
        let navigator = state.navigator.clone();
        move || match preview.toggle() {
            Ok(true) => {
                notifications::post(
                    ui_handle.clone(),
                    queue.clone(),
                    Notification::info("Preview opened", "Press Ctrl+Shift+P to close it"),
                );
                navigator.replay_secondary();
            }
            Ok(false) => {}
            Err(e) => {
                warn!("Failed to toggle preview: {}", e);
                notifications::post(
                    ui_handle.clone(),
                    queue.clone(),
                    Notification::warning("Preview unavailable", e.to_string()),
                );
            }
        }
    });

    logic.on_dismiss_notification({
        let ui_handle = ui.as_weak();
        let queue = state.notifications.clone();
        move |id| {
            if let Some(ui) = ui_handle.upgrade() {
                notifications::dismiss(&ui, &queue, id as u64);
            }
        }
    });

    setup_window_handlers(ui);
}

fn setup_window_handlers(ui: &crate::AppWindow) {
    let logic = ui.global::<crate::Logic>();

    let with_ui = |action: fn(&crate::AppWindow)| {
        let ui_handle = ui.as_weak();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                action(&ui);
            }
        }
    };

    logic.on_minimize_window(with_ui(window_controls::minimize));
    logic.on_maximize_restore(with_ui(window_controls::toggle_maximized));
    logic.on_close_window(with_ui(window_controls::close));
    logic.on_start_drag(with_ui(window_controls::start_drag));
    logic.on_snap_maximize(with_ui(window_controls::maximize));
    logic.on_snap_left(with_ui(|ui| window_controls::snap(ui, SnapLayout::LeftHalf)));
    logic.on_snap_right(with_ui(|ui| window_controls::snap(ui, SnapLayout::RightHalf)));
    logic.on_snap_center(with_ui(|ui| window_controls::snap(ui, SnapLayout::Centered)));

    ui.window().on_close_requested({
        let ui_handle = ui.as_weak();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                window_controls::save_state(&ui);
            }
            if let Err(e) = slint::quit_event_loop() {
                warn!("Failed to quit event loop: {}", e);
            }
            slint::CloseRequestResponse::HideWindow
        }
    });
}
