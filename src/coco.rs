//! COCO keypoint format data structures
//!
//! Only the fields the conversion reads are modelled; everything else in a COCO
//! document (info, licenses, categories, segmentation, ...) is ignored on load.
//! Numbers keep their JSON integer/float form so they are written back the same way.

use serde::Deserialize;

use crate::coord::Coord;

/// COCO image information
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    pub id: i64,
    pub file_name: String,
    pub width: Coord,
    pub height: Coord,
}

impl Image {
    pub fn new(
        id: i64,
        file_name: impl Into<String>,
        width: impl Into<Coord>,
        height: impl Into<Coord>,
    ) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    /// Image dimensions as `(width, height)`
    pub fn size(&self) -> (Coord, Coord) {
        (self.width, self.height)
    }
}

/// COCO annotation information
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Annotation {
    pub image_id: i64,
    pub bbox: [Coord; 4], // [x, y, width, height]
    /// Flattened `(x, y, visibility)` triples
    #[serde(default)]
    pub keypoints: Vec<Coord>,
}

impl Annotation {
    pub fn new(image_id: i64, bbox: [Coord; 4], keypoints: Vec<Coord>) -> Self {
        Self {
            image_id,
            bbox,
            keypoints,
        }
    }
}

/// The parts of a COCO keypoint file used by the conversion
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CocoFile {
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
}
