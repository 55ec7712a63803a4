//! State management for the image viewer application.

use crate::error::Result;
use crate::services::{NavigationController, NavigationWorker, NotificationQueue};
use crate::ui::SlintSink;
use std::sync::{Arc, Mutex};

pub mod navigation;

pub use navigation::{Direction, NavigationSet};

/// Application-wide state container.
pub struct AppState {
    /// Runs the session's navigation calls in order.
    pub navigator: Arc<NavigationWorker<SlintSink>>,
    /// Toasts currently shown in the main window.
    pub notifications: Arc<Mutex<NotificationQueue>>,
    /// Holds the preview window while it is open.
    pub preview: crate::ui::PreviewSlot,
}

impl AppState {
    pub fn new(ui: &crate::AppWindow) -> Result<Self> {
        let notifications = Arc::new(Mutex::new(NotificationQueue::new()));
        let preview = crate::ui::PreviewSlot::new();
        let sink = SlintSink::new(ui, preview.target(), notifications.clone());
        let navigator = NavigationWorker::new(NavigationController::new(sink))?;

        Ok(Self {
            navigator: Arc::new(navigator),
            notifications,
            preview,
        })
    }
}
