//! Service for handling image navigation operations.
//!
//! Coordinates the navigation set, the image loader and the presentation
//! sink. One controller exists per session; every call runs to completion
//! before the next one is accepted.

use crate::error::{AppError, Result};
use crate::file_utils::PathExt;
use crate::image_loader::{self, ImageRecord};
use crate::services::notification_service::Notification;
use crate::services::presentation::PresentationSink;
use crate::state::{Direction, NavigationSet};
use log::{debug, error};
use std::path::{Path, PathBuf};

/// Result type for navigation operations.
///
/// `Ok(None)` means the step was a no-op because nothing is navigable.
pub type NavigationResult = Result<Option<PathBuf>>;

/// Owns the session's navigation set, the current record and the sink.
pub struct NavigationController<S: PresentationSink> {
    navigation: NavigationSet,
    current: Option<ImageRecord>,
    sink: S,
}

impl<S: PresentationSink> NavigationController<S> {
    /// Creates a controller with nothing loaded.
    pub fn new(sink: S) -> Self {
        Self {
            navigation: NavigationSet::new(),
            current: None,
            sink,
        }
    }

    /// Loads `path`, rebuilds the folder listing around it and presents it.
    ///
    /// On failure the previous record and listing stay untouched.
    pub fn open_new_image(&mut self, path: &Path) -> Result<&ImageRecord> {
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        let record = match image_loader::load_image(&path) {
            Ok(record) => record,
            Err(e) => {
                self.report_failure("Failed to open image", &e);
                return Err(e);
            }
        };

        self.navigation.open(&path);
        debug!(
            "Opened {} in {:?} (navigable: {}, {} images)",
            path.format_for_log(),
            self.navigation.current_directory(),
            self.navigation.is_navigable(),
            self.navigation.image_count()
        );

        Ok(self.present(record))
    }

    /// Navigates to the next image, wrapping around.
    pub fn next(&mut self) -> NavigationResult {
        self.navigate(Direction::Next)
    }

    /// Navigates to the previous image, wrapping around.
    pub fn previous(&mut self) -> NavigationResult {
        self.navigate(Direction::Previous)
    }

    fn navigate(&mut self, direction: Direction) -> NavigationResult {
        let before = self.navigation.current_index();
        let Some(target) = self.navigation.step(direction) else {
            return Ok(None);
        };

        match image_loader::load_image(&target) {
            Ok(record) => {
                self.present(record);
                Ok(Some(target))
            }
            Err(e) => {
                self.navigation.restore_index(before);
                self.report_failure("Failed to load image", &e);
                Err(e)
            }
        }
    }

    /// Pushes the current payload to the preview view, e.g. right after it opens.
    pub fn replay_secondary(&self) {
        if let Some(record) = self.current() {
            self.sink.present_secondary(&record.payload);
        }
    }

    /// The most recently loaded record.
    pub fn current(&self) -> Option<&ImageRecord> {
        self.current.as_ref()
    }

    pub fn navigation(&self) -> &NavigationSet {
        &self.navigation
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn present(&mut self, record: ImageRecord) -> &ImageRecord {
        self.sink.present_primary(&record);
        self.sink.present_secondary(&record.payload);
        self.sink.present_position(
            self.navigation.current_index(),
            self.navigation.image_count(),
        );
        self.current.insert(record)
    }

    fn report_failure(&self, title: &str, err: &AppError) {
        error!("{}: {}", title, err);
        self.sink.notify(Notification::error(title, err.to_string()).persistent());
    }
}
