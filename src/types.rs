use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::coord::Coord;

/// A keypoint in the output format: `[x, y, visibility]`
pub type Keypoint = [Coord; 3];

// The per-image annotation document written for the R-CNN pipeline.
// `bboxes` and `keypoints` are index-aligned, one entry per source annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RcnnAnnotation {
    pub bboxes: Vec<[Coord; 4]>,
    pub keypoints: Vec<Vec<Keypoint>>,
}

impl RcnnAnnotation {
    pub fn len(&self) -> usize {
        self.bboxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bboxes.is_empty()
    }

    pub fn push(&mut self, bbox: [Coord; 4], keypoints: Vec<Keypoint>) {
        self.bboxes.push(bbox);
        self.keypoints.push(keypoints);
    }
}

// Struct to hold the paths to the output directories of one dataset
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub images_dir: PathBuf,
    pub annotations_dir: PathBuf,
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub images_processed: usize,
    pub annotations_converted: usize,
    pub images_without_annotations: usize,
    pub orphan_annotations: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_image(&mut self, annotation_count: usize) {
        self.images_processed += 1;
        self.annotations_converted += annotation_count;
        if annotation_count == 0 {
            self.images_without_annotations += 1;
        }
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Images processed: {}", self.images_processed);
        log::info!("Annotations converted: {}", self.annotations_converted);
        log::info!(
            "Images without annotations: {}",
            self.images_without_annotations
        );

        if self.orphan_annotations > 0 {
            log::warn!(
                "Skipped annotations referencing unknown images: {}",
                self.orphan_annotations
            );
        }
    }
}
