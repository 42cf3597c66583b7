use indicatif::ProgressBar;
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::coco::{Annotation, CocoFile, Image};
use crate::config::Args;
use crate::conversion::convert_annotations;
use crate::error::Result;
use crate::io::{copy_image, setup_output_directories, write_annotation_file};
use crate::types::{OutputDirs, ProcessingStats};
use crate::utils::{annotation_file_name, create_progress_bar, read_and_parse_json};

/// Annotations grouped by the id of the image they belong to, in source order.
#[derive(Debug, Default, Clone)]
pub struct GroupedAnnotations {
    groups: HashMap<i64, Vec<Annotation>>,
}

impl GroupedAnnotations {
    pub fn new(annotations: Vec<Annotation>) -> Self {
        let mut groups: HashMap<i64, Vec<Annotation>> = HashMap::new();
        for annotation in annotations {
            groups
                .entry(annotation.image_id)
                .or_default()
                .push(annotation);
        }
        Self { groups }
    }

    /// Annotations of `image_id`; empty if the image has none.
    pub fn get(&self, image_id: i64) -> &[Annotation] {
        self.groups
            .get(&image_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of annotations whose image id is not in `image_ids`
    pub fn count_orphans(&self, image_ids: &HashSet<i64>) -> usize {
        self.groups
            .iter()
            .filter(|(id, _)| !image_ids.contains(*id))
            .map(|(_, group)| group.len())
            .sum()
    }
}

/// Copy one image and write its converted annotation file.
///
/// Returns the number of annotations written for the image.
pub fn process_image(
    image: &Image,
    annotations: &GroupedAnnotations,
    source_images_path: &Path,
    output_dirs: &OutputDirs,
) -> Result<usize> {
    copy_image(source_images_path, &output_dirs.images_dir, &image.file_name)?;

    let content = convert_annotations(image, annotations.get(image.id))?;
    let output_path = output_dirs
        .annotations_dir
        .join(annotation_file_name(&image.file_name));
    write_annotation_file(&output_path, &content)?;

    if content.is_empty() {
        debug!("No annotations for image {} ({})", image.id, image.file_name);
    }
    Ok(content.len())
}

/// Convert every image of a loaded COCO file, in the order of its `images` array.
///
/// Stops at the first failure; images already written stay on disk.
pub fn process_dataset(
    coco: CocoFile,
    source_images_path: &Path,
    output_dirs: &OutputDirs,
    pb: &ProgressBar,
) -> Result<ProcessingStats> {
    let CocoFile {
        images,
        annotations,
    } = coco;
    let annotations = GroupedAnnotations::new(annotations);

    let mut stats = ProcessingStats::new();
    let image_ids: HashSet<i64> = images.iter().map(|image| image.id).collect();
    stats.orphan_annotations = annotations.count_orphans(&image_ids);

    for image in &images {
        let count = process_image(image, &annotations, source_images_path, output_dirs)?;
        stats.record_image(count);
        pb.inc(1);
    }

    Ok(stats)
}

/// Full conversion run: load the input, prepare the output tree, convert every image.
pub fn run(args: &Args) -> Result<ProcessingStats> {
    info!("Loading annotations from {}", args.input_file.display());
    let coco = read_and_parse_json(&args.input_file)?;
    info!(
        "Loaded {} images and {} annotations.",
        coco.images.len(),
        coco.annotations.len()
    );

    let output_dirs = setup_output_directories(&args.target_path, &args.dataset_name)?;

    let pb = create_progress_bar(coco.images.len() as u64, &args.dataset_name);
    let stats = process_dataset(coco, &args.source_images_path, &output_dirs, &pb)?;
    pb.finish_with_message("Conversion complete");

    Ok(stats)
}
