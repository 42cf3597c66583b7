use serde::Serialize;
use serde_json::ser::Formatter;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::types::{OutputDirs, RcnnAnnotation};
use crate::utils::create_output_directory;

/// Set up `<target_path>/<dataset_name>/{images,annotations}`.
///
/// The target root is created if missing and left untouched otherwise; both
/// dataset subdirectories are wiped and recreated.
pub fn setup_output_directories(target_path: &Path, dataset_name: &str) -> Result<OutputDirs> {
    fs::create_dir_all(target_path)
        .map_err(|e| ConvertError::io("create directory", target_path, e))?;

    let dataset_dir = target_path.join(dataset_name);
    let images_dir = create_output_directory(&dataset_dir.join("images"))?;
    let annotations_dir = create_output_directory(&dataset_dir.join("annotations"))?;

    Ok(OutputDirs {
        images_dir,
        annotations_dir,
    })
}

/// Copy `file_name` from the source image directory into the output images
/// directory, replacing any existing file of that name.
pub fn copy_image(source_dir: &Path, images_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let source = source_dir.join(file_name);
    let destination = images_dir.join(file_name);
    fs::copy(&source, &destination).map_err(|e| ConvertError::io("copy image", &source, e))?;
    Ok(destination)
}

/// Single-line JSON with `", "` and `": "` separators, the layout of Python's
/// `json.dump` defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Write one per-image annotation document as JSON, replacing any existing file.
pub fn write_annotation_file(path: &Path, content: &RcnnAnnotation) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::io("create", path, e))?;
    let mut writer = BufWriter::new(file);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, SpacedFormatter);
    content
        .serialize(&mut serializer)
        .map_err(|source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    writer
        .flush()
        .map_err(|e| ConvertError::io("write", path, e))
}
