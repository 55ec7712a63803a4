//! Toast display for queued notifications.

use crate::services::{Notification, NotificationQueue};
use crate::ui::state_helpers;
use log::warn;
use std::sync::{Arc, Mutex};

/// Queues a notification and shows it; callable from any thread.
///
/// Non-persistent toasts dismiss themselves after their duration.
pub fn post(
    ui: slint::Weak<crate::AppWindow>,
    queue: Arc<Mutex<NotificationQueue>>,
    notification: Notification,
) {
    let posted = match queue.lock() {
        Ok(mut queue) => queue.push(notification),
        Err(_) => {
            warn!("Notification queue poisoned; dropping {:?}", notification.title);
            return;
        }
    };

    let timer_ui = ui.clone();
    let result = ui.upgrade_in_event_loop(move |ui| {
        refresh(&ui, &queue);

        if !posted.persistent {
            let id = posted.id;
            slint::Timer::single_shot(posted.duration, move || {
                if let Some(ui) = timer_ui.upgrade() {
                    dismiss(&ui, &queue, id);
                }
            });
        }
    });
    if let Err(e) = result {
        warn!("Cannot show notification: {}", e);
    }
}

/// Removes a toast, e.g. when it is clicked or its timer fires.
pub fn dismiss(ui: &crate::AppWindow, queue: &Arc<Mutex<NotificationQueue>>, id: u64) {
    let removed = queue.lock().map(|mut q| q.dismiss(id)).unwrap_or(false);
    if removed {
        refresh(ui, queue);
    }
}

fn refresh(ui: &crate::AppWindow, queue: &Arc<Mutex<NotificationQueue>>) {
    if let Ok(queue) = queue.lock() {
        state_helpers::set_notifications(ui, queue.visible());
    }
}
