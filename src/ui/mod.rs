//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: UI async work that must stay on the main thread (file dialog)
//! - navigation worker: a one-thread rayon pool running opens and steps in order
//! - `upgrade_in_event_loop`: hands results from a worker back to the UI thread

pub mod handlers;
pub mod image_display;
pub mod notifications;
pub mod preview;
mod state_helpers;
pub mod window_controls;

pub use handlers::setup_handlers;
pub use image_display::SlintSink;
pub use preview::PreviewSlot;
pub use state_helpers::*;
