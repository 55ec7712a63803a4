//! Ordered execution of navigation calls off the UI thread.
//!
//! All opens and steps go through one single-threaded rayon pool. Jobs
//! submitted from outside the pool land in its FIFO injector, so they run
//! one after another in the order the user triggered them.

use crate::error::{AppError, Result};
use crate::services::navigation_service::NavigationController;
use crate::services::presentation::PresentationSink;
use crate::state::Direction;
use log::{debug, error};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub struct NavigationWorker<S: PresentationSink + Send + 'static> {
    pool: rayon::ThreadPool,
    controller: Arc<Mutex<NavigationController<S>>>,
}

impl<S: PresentationSink + Send + 'static> NavigationWorker<S> {
    pub fn new(controller: NavigationController<S>) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .thread_name(|_| "navigation".to_string())
            .build()
            .map_err(|e| AppError::Worker(e.to_string()))?;

        Ok(Self {
            pool,
            controller: Arc::new(Mutex::new(controller)),
        })
    }

    /// Queues `job` behind every job submitted before it.
    pub fn submit<F>(&self, job: F)
    where
        F: FnOnce(&mut NavigationController<S>) + Send + 'static,
    {
        let controller = Arc::clone(&self.controller);
        self.pool.spawn_fifo(move || match controller.lock() {
            Ok(mut controller) => job(&mut controller),
            Err(_) => error!("Navigation controller poisoned"),
        });
    }

    /// Opens `path`. Failures are reported through the sink.
    pub fn open(&self, path: PathBuf) {
        self.submit(move |controller| {
            if let Err(e) = controller.open_new_image(&path) {
                debug!("Open of {:?} failed: {}", path, e);
            }
        });
    }

    pub fn navigate(&self, direction: Direction) {
        self.submit(move |controller| {
            let result = match direction {
                Direction::Next => controller.next(),
                Direction::Previous => controller.previous(),
            };
            match result {
                Ok(Some(path)) => debug!(
                    "Moved {:?} to {:?} ({:?} of {})",
                    direction,
                    path,
                    controller.navigation().current_index(),
                    controller.navigation().image_count()
                ),
                Ok(None) => debug!("Nothing to navigate"),
                Err(e) => debug!("Navigation {:?} failed: {}", direction, e),
            }
        });
    }

    /// Re-sends the current payload to the preview without waiting for
    /// queued navigation.
    pub fn replay_secondary(&self) {
        let controller = Arc::clone(&self.controller);
        rayon::spawn(move || {
            if let Ok(controller) = controller.lock() {
                controller.replay_secondary();
            }
        });
    }
}
