//! Pushing loaded images into the Slint views.
//!
//! Sink methods run on rayon worker threads. Pixels are decoded there and
//! only the finished `SharedPixelBuffer` is handed to the event loop.

use crate::image_loader::{self, ImageRecord, InlinePayload};
use crate::services::{Notification, NotificationQueue, PresentationSink};
use crate::ui::preview::PreviewTarget;
use crate::ui::state_helpers;
use log::{debug, warn};
use slint::{ComponentHandle, Rgba8Pixel, SharedPixelBuffer};
use std::sync::{Arc, Mutex};

/// Presentation sink backed by the main window and the optional preview.
pub struct SlintSink {
    ui: slint::Weak<crate::AppWindow>,
    preview: PreviewTarget,
    notifications: Arc<Mutex<NotificationQueue>>,
}

impl SlintSink {
    pub fn new(
        ui: &crate::AppWindow,
        preview: PreviewTarget,
        notifications: Arc<Mutex<NotificationQueue>>,
    ) -> Self {
        Self {
            ui: ui.as_weak(),
            preview,
            notifications,
        }
    }
}

fn decode_for_display(payload: &InlinePayload) -> Option<SharedPixelBuffer<Rgba8Pixel>> {
    image_loader::decode_pixels(payload)
        .map_err(|e| debug!("Nothing to draw for {} payload: {}", payload.mime_type(), e))
        .ok()
}

impl PresentationSink for SlintSink {
    fn present_primary(&self, record: &ImageRecord) {
        let pixels = decode_for_display(&record.payload);
        let name = record.name.clone();
        let path = record.path.display().to_string();
        let size = record.formatted_size();
        let (width, height) = (record.width, record.height);

        let result = self.ui.upgrade_in_event_loop(move |ui| {
            state_helpers::set_file_info(&ui, &name, &path, &size, width, height);
            state_helpers::set_displayed_image(&ui, pixels.map(slint::Image::from_rgba8));
        });
        if let Err(e) = result {
            warn!("Main window unavailable: {}", e);
        }
    }

    fn present_secondary(&self, payload: &InlinePayload) {
        let Some(preview) = self.preview.lock().ok().and_then(|target| target.clone()) else {
            return;
        };

        let pixels = decode_for_display(payload);
        let result = preview.upgrade_in_event_loop(move |preview| {
            let state = preview.global::<crate::PreviewState>();
            state.set_has_image(pixels.is_some());
            state.set_preview_image(pixels.map(slint::Image::from_rgba8).unwrap_or_default());
        });
        if let Err(e) = result {
            warn!("Preview window unavailable: {}", e);
        }
    }

    fn notify(&self, notification: Notification) {
        crate::ui::notifications::post(self.ui.clone(), self.notifications.clone(), notification);
    }

    fn present_position(&self, index: Option<usize>, total: usize) {
        let result = self.ui.upgrade_in_event_loop(move |ui| {
            state_helpers::set_navigation_info(&ui, index, total);
        });
        if let Err(e) = result {
            warn!("Main window unavailable: {}", e);
        }
    }
}
