//! COCO keypoint to R-CNN annotation converter
//!
//! This library converts a COCO keypoint annotation file into one JSON annotation
//! file per image (corner-form boxes, clamped keypoints) and copies the images
//! into a `<target>/<dataset>/{images,annotations}` layout.

pub mod coco;
pub mod config;
pub mod coord;
pub mod conversion;
pub mod dataset;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use coco::{Annotation, CocoFile, Image};
pub use config::Args;
pub use coord::Coord;
pub use conversion::{convert_annotations, convert_keypoints, xywh_to_xyxy};
pub use dataset::{process_dataset, process_image, run, GroupedAnnotations};
pub use error::ConvertError;
pub use io::{copy_image, setup_output_directories, write_annotation_file, SpacedFormatter};
pub use types::{OutputDirs, ProcessingStats, RcnnAnnotation};
pub use utils::{annotation_file_name, read_and_parse_json};
