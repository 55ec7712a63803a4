//! Title bar actions and window geometry for the frameless main window.

use crate::services::window_state_service::{self, Bounds, SnapLayout, WindowState};
use i_slint_backend_winit::WinitWindowAccessor;
use log::{info, warn};
use slint::ComponentHandle;

pub fn minimize(ui: &crate::AppWindow) {
    ui.window().set_minimized(true);
}

pub fn toggle_maximized(ui: &crate::AppWindow) {
    let window = ui.window();
    window.set_maximized(!window.is_maximized());
}

pub fn maximize(ui: &crate::AppWindow) {
    let window = ui.window();
    if !window.is_maximized() {
        window.set_maximized(true);
    }
}

/// Lets the OS move the window while the title bar is held.
pub fn start_drag(ui: &crate::AppWindow) {
    if let Some(Err(e)) = ui.window().with_winit_window(|w| w.drag_window()) {
        warn!("Window drag failed: {}", e);
    }
}

fn current_monitor(ui: &crate::AppWindow) -> Option<Bounds> {
    ui.window()
        .with_winit_window(|w| {
            w.current_monitor().map(|monitor| {
                let position = monitor.position();
                let size = monitor.size();
                Bounds {
                    x: position.x,
                    y: position.y,
                    width: size.width,
                    height: size.height,
                }
            })
        })
        .flatten()
}

pub fn snap(ui: &crate::AppWindow, layout: SnapLayout) {
    let Some(monitor) = current_monitor(ui) else {
        warn!("No monitor information; cannot snap to {:?}", layout);
        return;
    };
    apply_bounds(ui, layout.bounds_within(monitor));
}

fn apply_bounds(ui: &crate::AppWindow, bounds: Bounds) {
    let window = ui.window();
    window.set_maximized(false);
    window.set_position(slint::PhysicalPosition::new(bounds.x, bounds.y));
    window.set_size(slint::PhysicalSize::new(bounds.width, bounds.height));
}

/// Snapshot of the current geometry for persistence.
pub fn capture_state(ui: &crate::AppWindow) -> WindowState {
    let window = ui.window();
    let position = window.position();
    let size = window.size();
    WindowState {
        x: Some(position.x),
        y: Some(position.y),
        width: size.width,
        height: size.height,
        maximized: window.is_maximized(),
    }
}

/// Applies a restored geometry; the position is left to the OS when none was saved.
pub fn restore_state(ui: &crate::AppWindow, state: &WindowState) {
    let window = ui.window();
    window.set_size(slint::PhysicalSize::new(state.width, state.height));
    if let Some((x, y)) = state.position() {
        window.set_position(slint::PhysicalPosition::new(x, y));
    }
    if state.maximized {
        window.set_maximized(true);
    }
}

pub fn save_state(ui: &crate::AppWindow) {
    let state = capture_state(ui);
    match window_state_service::save(&state) {
        Ok(()) => info!("Saved window state {:?}", state),
        Err(e) => warn!("Failed to save window state: {}", e),
    }
}

/// Saves the geometry and ends the session, closing the preview too.
pub fn close(ui: &crate::AppWindow) {
    save_state(ui);
    if let Err(e) = ui.hide() {
        warn!("Failed to hide main window: {}", e);
    }
    if let Err(e) = slint::quit_event_loop() {
        warn!("Failed to quit event loop: {}", e);
    }
}
