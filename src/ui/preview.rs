//! Floating preview window.
//!
//! The strong handle stays on the UI thread. Worker threads only ever see
//! the [`PreviewTarget`], an optional weak handle that is `None` while the
//! preview is closed.

use log::{info, warn};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Where secondary presentations go; empty when no preview is open.
pub type PreviewTarget = Arc<Mutex<Option<slint::Weak<crate::PreviewWindow>>>>;

#[derive(Clone)]
pub struct PreviewSlot {
    window: Rc<RefCell<Option<crate::PreviewWindow>>>,
    target: PreviewTarget,
}

impl PreviewSlot {
    pub fn new() -> Self {
        Self {
            window: Rc::new(RefCell::new(None)),
            target: Arc::new(Mutex::new(None)),
        }
    }

    pub fn target(&self) -> PreviewTarget {
        self.target.clone()
    }

    /// Opens the preview when closed and closes it when open.
    ///
    /// Returns `true` when a new preview window was opened.
    pub fn toggle(&self) -> Result<bool, slint::PlatformError> {
        if let Some(preview) = self.window.borrow_mut().take() {
            self.set_target(None);
            preview.hide()?;
            info!("Preview closed");
            return Ok(false);
        }

        let preview = crate::PreviewWindow::new()?;

        preview.on_close_preview({
            let slot = self.clone();
            move || slot.close_later()
        });
        preview.window().on_close_requested({
            let slot = self.clone();
            move || {
                slot.close_later();
                slint::CloseRequestResponse::HideWindow
            }
        });

        self.set_target(Some(preview.as_weak()));
        preview.show()?;
        *self.window.borrow_mut() = Some(preview);
        info!("Preview opened");
        Ok(true)
    }

    /// Closes from inside one of the preview's own callbacks.
    ///
    /// The handle is dropped on the next event loop turn, after the callback returned.
    fn close_later(&self) {
        self.set_target(None);
        let window = self.window.clone();
        slint::Timer::single_shot(Duration::ZERO, move || {
            if let Some(preview) = window.borrow_mut().take() {
                match preview.hide() {
                    Ok(()) => info!("Preview closed"),
                    Err(e) => warn!("Failed to hide preview: {}", e),
                }
            }
        });
    }

    fn set_target(&self, weak: Option<slint::Weak<crate::PreviewWindow>>) {
        if let Ok(mut target) = self.target.lock() {
            *target = weak;
        }
    }
}

impl Default for PreviewSlot {
    fn default() -> Self {
        Self::new()
    }
}
