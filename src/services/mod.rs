//! Service layer for business logic.
//!
//! Separates business logic from UI handlers for better testability and maintainability.

pub mod navigation_service;
pub mod navigation_worker;
pub mod notification_service;
pub mod presentation;
pub mod window_state_service;

pub use navigation_service::NavigationController;
pub use navigation_worker::NavigationWorker;
pub use notification_service::{Notification, NotificationQueue};
pub use presentation::PresentationSink;
pub use window_state_service::SnapLayout;
