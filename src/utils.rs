use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::coco::CocoFile;
use crate::error::{ConvertError, Result};

/// Read and parse a whole COCO annotation file.
///
/// The document is parsed straight from a buffered file stream; both a missing
/// file and malformed JSON are reported with the offending path.
pub fn read_and_parse_json(path: &Path) -> Result<CocoFile> {
    let file = fs::File::open(path).map_err(|e| ConvertError::io("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Name of the annotation file written for an image.
///
/// Everything from the first `.` onwards is dropped, so `robot.annotated.png`
/// becomes `robot.json`.
pub fn annotation_file_name(image_file_name: &str) -> String {
    let stem = image_file_name.split('.').next().unwrap_or_default();
    format!("{}.json", stem)
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
            label
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Recreate an output directory from scratch and return its path.
///
/// Removal of a previous directory is best-effort: a failure is logged and the
/// directory is created anyway. Failing to create it is an error.
pub fn create_output_directory(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        warn!(
            "Directory {:?} already exists. Deleting and recreating it.",
            path
        );
        if let Err(e) = fs::remove_dir_all(path) {
            warn!("Failed to remove directory {:?}: {}", path, e);
        }
    }
    fs::create_dir_all(path).map_err(|e| ConvertError::io("create directory", path, e))?;
    Ok(path.to_path_buf())
}
