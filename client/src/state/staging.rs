//! Bounded staging area for listing photos.
//!
//! DESIGN
//! ======
//! Files picked through the file input and files dropped on the drop zone go
//! through the same `add_images` call. The collection never holds more than
//! `MAX_IMAGES`; overflow from a batch is dropped without complaint. The first
//! entry is the main image.

#[cfg(test)]
#[path = "staging_test.rs"]
mod staging_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound on staged photos per listing.
pub const MAX_IMAGES: usize = 8;

/// A locally selected file held until the listing is submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedImage {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    /// Browser object URL used for the thumbnail; revoked on removal.
    pub preview_url: Option<String>,
}

impl StagedImage {
    pub fn new(name: impl Into<String>, size: u64, preview_url: Option<String>) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), size, preview_url }
    }
}

/// Ordered staged photos, at most `MAX_IMAGES` long.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStaging {
    images: Vec<StagedImage>,
}

impl ImageStaging {
    pub fn images(&self) -> &[StagedImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.images.len() >= MAX_IMAGES
    }

    pub fn main_image(&self) -> Option<&StagedImage> {
        self.images.first()
    }

    /// Slots left before the cap.
    pub fn remaining_capacity(&self) -> usize {
        MAX_IMAGES.saturating_sub(self.images.len())
    }

    /// Append as many of `batch` as fit and return how many were kept.
    pub fn add_images<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator<Item = StagedImage>,
    {
        let before = self.images.len();
        self.images.extend(batch.into_iter().take(self.remaining_capacity()));
        self.images.len() - before
    }

    /// Remove the photo at `index`, shifting later photos down.
    ///
    /// The removed entry is handed back so the caller can release its
    /// preview URL. Out-of-range indices do nothing.
    pub fn remove_image(&mut self, index: usize) -> Option<StagedImage> {
        if index < self.images.len() { Some(self.images.remove(index)) } else { None }
    }

    /// Drop every photo, returning them for cleanup.
    pub fn clear(&mut self) -> Vec<StagedImage> {
        std::mem::take(&mut self.images)
    }
}

/// Drag events seen by the drop zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    /// Whether the drop zone is highlighted after this event.
    pub fn highlights(self) -> bool {
        matches!(self, Self::Enter | Self::Over)
    }
}
