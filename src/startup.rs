use i_slint_backend_winit::WinitWindowAccessor;
use i_slint_backend_winit::{EventResult, winit::event::WindowEvent};
use log::debug;
use slint::ComponentHandle;
use std::path::PathBuf;

use crate::services::Notification;
use crate::services::window_state_service::{self, WindowState};
use crate::state::AppState;
use crate::ui::{notifications, window_controls};

/// First non-flag argument, opened like a dialog pick.
fn startup_image_from_args() -> Option<PathBuf> {
    std::env::args_os().skip(1).find_map(|arg| {
        if arg.to_string_lossy().starts_with('-') {
            None
        } else {
            Some(PathBuf::from(arg))
        }
    })
}

/// Keeps the status bar in sync with the window and opens dropped files.
fn setup_window_hooks(app: &crate::AppWindow, app_state: &AppState) {
    let ui_handle = app.as_weak();
    let navigator = app_state.navigator.clone();

    app.window().on_winit_window_event(move |window, event| {
        match event {
            WindowEvent::Moved(_) | WindowEvent::Resized(_) => {
                if let Some(ui) = ui_handle.upgrade() {
                    let position = window.position();
                    let size = window.size();
                    crate::ui::set_status(&ui, position.x, position.y, size.width, size.height);
                }
            }
            WindowEvent::DroppedFile(path) => {
                debug!("File dropped: {:?}", path);
                navigator.open(path.clone());
            }
            _ => {}
        }

        EventResult::Propagate
    });
}

pub fn configure_startup_opening(app: &crate::AppWindow, app_state: &AppState) {
    match window_state_service::load() {
        Some(state) => {
            window_controls::restore_state(app, &state);
            notifications::post(
                app.as_weak(),
                app_state.notifications.clone(),
                Notification::success("Welcome back", "Last window size and position restored"),
            );
        }
        None => window_controls::restore_state(app, &WindowState::default()),
    }
    setup_window_hooks(app, app_state);

    if let Some(path) = startup_image_from_args() {
        app_state.navigator.open(path);
    }
}
