use crate::coco::{Annotation, Image};
use crate::coord::Coord;
use crate::error::{ConvertError, Result};
use crate::types::{Keypoint, RcnnAnnotation};

// Pull a coordinate that reaches past the raster back onto its last pixel.
// Only the upper bound is clamped; the result takes the dimension's number type.
fn clamp_upper(value: Coord, dimension: Coord) -> Coord {
    if value.is_at_least(dimension) {
        dimension - Coord::ONE
    } else {
        value
    }
}

// Clamp one axis of a box, widening it by a pixel if clamping collapsed it.
// The widened edge may land on `dimension` itself.
fn clamp_span(start: Coord, end: Coord, dimension: Coord) -> (Coord, Coord) {
    let start = clamp_upper(start, dimension);
    let end = clamp_upper(end, dimension);
    if start.numeric_eq(end) {
        (start, start + Coord::ONE)
    } else {
        (start, end)
    }
}

/// Convert a COCO `[x, y, width, height]` box to corner form `[x1, y1, x2, y2]`
/// clamped to an image of `size = (width, height)` pixels.
pub fn xywh_to_xyxy(bbox: [Coord; 4], size: (Coord, Coord)) -> [Coord; 4] {
    let [x1, y1, w, h] = bbox;
    let (width, height) = size;

    let (x1, x2) = clamp_span(x1, x1 + w, width);
    let (y1, y2) = clamp_span(y1, y1 + h, height);

    [x1, y1, x2, y2]
}

/// Split a flat `[x, y, v, ...]` list into triples, clamping `x` and `y` to the
/// image and passing the visibility flag through.
///
/// A trailing incomplete triple is dropped; [`convert_annotations`] rejects such
/// lists before they get here.
pub fn convert_keypoints(keypoints: &[Coord], size: (Coord, Coord)) -> Vec<Keypoint> {
    let (width, height) = size;
    keypoints
        .chunks_exact(3)
        .map(|triple| {
            [
                clamp_upper(triple[0], width),
                clamp_upper(triple[1], height),
                triple[2],
            ]
        })
        .collect()
}

/// Convert every annotation of one image into the per-image output document.
pub fn convert_annotations(image: &Image, annotations: &[Annotation]) -> Result<RcnnAnnotation> {
    let size = image.size();
    let mut content = RcnnAnnotation {
        bboxes: Vec::with_capacity(annotations.len()),
        keypoints: Vec::with_capacity(annotations.len()),
    };

    for annotation in annotations {
        if annotation.keypoints.len() % 3 != 0 {
            return Err(ConvertError::MalformedKeypoints {
                image_id: image.id,
                len: annotation.keypoints.len(),
            });
        }
        content.push(
            xywh_to_xyxy(annotation.bbox, size),
            convert_keypoints(&annotation.keypoints, size),
        );
    }

    Ok(content)
}
