use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for converting a COCO keypoint file to per-image R-CNN annotations.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the COCO annotation file
    #[arg(short = 'i', long = "input_file")]
    pub input_file: PathBuf,

    /// Directory containing the source images
    #[arg(short = 's', long = "source_images_path")]
    pub source_images_path: PathBuf,

    /// Target folder to store the converted dataset
    #[arg(short = 't', long = "target_path")]
    pub target_path: PathBuf,

    /// Dataset name, used as the subfolder under the target folder
    #[arg(short = 'n', long = "dataset_name", value_parser = validate_dataset_name)]
    pub dataset_name: String,
}

// The dataset name becomes a single path component
fn validate_dataset_name(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("DATASET_NAME must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}
