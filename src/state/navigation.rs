//! Navigation state for managing image file lists and current position.

use crate::file_utils;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Direction for navigation through images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Sorted sibling images of the last opened file and the position within them.
///
/// `current_index` is `None` when the opened file is not one of the entries;
/// stepping is then a no-op even though the file itself is displayed.
#[derive(Debug, Default)]
pub struct NavigationSet {
    current_directory: Option<PathBuf>,
    entries: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl NavigationSet {
    /// Creates a new empty navigation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the entries from the anchor's directory and positions on the anchor.
    pub fn open(&mut self, anchor: &Path) {
        self.current_directory = anchor.parent().map(Path::to_path_buf);
        self.entries = file_utils::scan_siblings(anchor);
        self.current_index = self.entries.iter().position(|p| p == anchor);

        if self.current_index.is_none() {
            debug!(
                "{:?} is not among {} scanned entries; navigation disabled",
                anchor,
                self.entries.len()
            );
        }
    }

    /// Moves one step with wraparound and returns the new current path.
    pub fn step(&mut self, direction: Direction) -> Option<PathBuf> {
        let Some(index) = self.current_index else {
            warn!("No images available for navigation");
            return None;
        };

        let len = self.entries.len();
        let new_index = match direction {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        };

        self.current_index = Some(new_index);
        Some(self.entries[new_index].clone())
    }

    /// Puts the position back after a step whose target failed to load.
    pub fn restore_index(&mut self, index: Option<usize>) {
        self.current_index = index.filter(|i| *i < self.entries.len());
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_directory(&self) -> Option<&Path> {
        self.current_directory.as_deref()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn image_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_navigable(&self) -> bool {
        self.current_index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn populate(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|name| {
                let path = dir.join(name);
                fs::write(&path, b"fake image data").expect("failed to write test file");
                path
            })
            .collect()
    }

    #[test]
    fn open_positions_on_anchor() {
        let dir = tempdir().unwrap();
        let files = populate(dir.path(), &["a.png", "b.png", "c.png"]);

        let mut nav = NavigationSet::new();
        nav.open(&files[1]);

        assert_eq!(nav.current_index(), Some(1));
        assert_eq!(nav.image_count(), 3);
        assert_eq!(nav.current_directory(), Some(dir.path()));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let dir = tempdir().unwrap();
        let files = populate(dir.path(), &["a.png", "b.png"]);

        let mut nav = NavigationSet::new();
        nav.open(&files[1]);

        assert_eq!(nav.step(Direction::Next), Some(files[0].clone()));
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let dir = tempdir().unwrap();
        let files = populate(dir.path(), &["a.png", "b.png", "c.png"]);

        let mut nav = NavigationSet::new();
        nav.open(&files[0]);

        assert_eq!(nav.step(Direction::Previous), Some(files[2].clone()));
    }

    #[test]
    fn stepping_len_times_returns_to_start() {
        let dir = tempdir().unwrap();
        let files = populate(dir.path(), &["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"]);

        for direction in [Direction::Next, Direction::Previous] {
            let mut nav = NavigationSet::new();
            nav.open(&files[2]);
            for _ in 0..files.len() {
                nav.step(direction);
            }
            assert_eq!(nav.current_index(), Some(2), "{:?} cycle", direction);
        }
    }

    #[test]
    fn next_then_previous_is_identity() {
        let dir = tempdir().unwrap();
        let files = populate(dir.path(), &["a.gif", "b.gif", "c.gif"]);

        for start in 0..files.len() {
            let mut nav = NavigationSet::new();
            nav.open(&files[start]);
            nav.step(Direction::Next);
            nav.step(Direction::Previous);
            assert_eq!(nav.current_index(), Some(start));
        }
    }

    #[test]
    fn single_file_wraps_to_itself() {
        let dir = tempdir().unwrap();
        let files = populate(dir.path(), &["img5.png"]);

        let mut nav = NavigationSet::new();
        nav.open(&files[0]);

        assert_eq!(nav.entries(), &files[..]);
        assert_eq!(nav.current_index(), Some(0));
        assert_eq!(nav.step(Direction::Next), Some(files[0].clone()));
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn empty_directory_makes_steps_no_ops() {
        let dir = tempdir().unwrap();
        let files = populate(dir.path(), &["notes.txt"]);

        let mut nav = NavigationSet::new();
        nav.open(&files[0]);

        assert!(!nav.is_navigable());
        assert_eq!(nav.step(Direction::Next), None);
        assert_eq!(nav.step(Direction::Previous), None);
        assert_eq!(nav.current_index(), None);
    }

    #[test]
    fn unlisted_anchor_is_not_navigable_but_keeps_entries() {
        let dir = tempdir().unwrap();
        let files = populate(dir.path(), &["a.png", "b.png", "scan.tif"]);

        let mut nav = NavigationSet::new();
        nav.open(&files[2]);

        assert_eq!(nav.image_count(), 2);
        assert_eq!(nav.current_index(), None);
        assert_eq!(nav.step(Direction::Next), None);
    }

    #[test]
    fn reopen_replaces_previous_entries() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let a = populate(first.path(), &["a.png", "b.png"]);
        let b = populate(second.path(), &["z.png"]);

        let mut nav = NavigationSet::new();
        nav.open(&a[0]);
        nav.open(&b[0]);

        assert_eq!(nav.entries(), &b[..]);
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn restore_index_rejects_out_of_range() {
        let dir = tempdir().unwrap();
        let files = populate(dir.path(), &["a.png", "b.png"]);

        let mut nav = NavigationSet::new();
        nav.open(&files[0]);
        nav.step(Direction::Next);
        nav.restore_index(Some(0));
        assert_eq!(nav.current_index(), Some(0));

        nav.restore_index(Some(7));
        assert_eq!(nav.current_index(), None);
    }
}
