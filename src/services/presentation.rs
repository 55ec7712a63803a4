//! Views that receive pushed image data.

use crate::image_loader::{ImageRecord, InlinePayload};
use crate::services::notification_service::Notification;

/// Fire-and-forget targets for loaded images.
///
/// Implementations decide whether a view exists; callers never check.
pub trait PresentationSink {
    /// Shows the record in the main view.
    fn present_primary(&self, record: &ImageRecord);

    /// Shows the payload in the preview view, if one is open.
    fn present_secondary(&self, payload: &InlinePayload);

    /// Reports a failure or status change to the user.
    fn notify(&self, notification: Notification);

    /// Position of the current image within its folder, `None` when not navigable.
    fn present_position(&self, _index: Option<usize>, _total: usize) {}
}
