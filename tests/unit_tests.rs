use coco2rcnn::{
    annotation_file_name, convert_annotations, convert_keypoints, xywh_to_xyxy, Annotation,
    ConvertError, Coord, GroupedAnnotations, Image,
};
use std::collections::HashSet;

fn ints<const N: usize>(values: [i64; N]) -> [Coord; N] {
    values.map(Coord::Int)
}

fn size(width: i64, height: i64) -> (Coord, Coord) {
    (Coord::Int(width), Coord::Int(height))
}

#[test]
fn test_xywh_to_xyxy_inside_image() {
    assert_eq!(
        xywh_to_xyxy(ints([10, 20, 30, 40]), size(100, 100)),
        ints([10, 20, 40, 60])
    );
    assert_eq!(
        xywh_to_xyxy(
            [
                Coord::Float(1.5),
                Coord::Float(2.25),
                Coord::Float(3.0),
                Coord::Float(4.5)
            ],
            size(10, 10)
        ),
        [
            Coord::Float(1.5),
            Coord::Float(2.25),
            Coord::Float(4.5),
            Coord::Float(6.75)
        ]
    );
}

#[test]
fn test_xywh_to_xyxy_clamps_right_and_bottom_edges() {
    assert_eq!(
        xywh_to_xyxy(ints([50, 60, 100, 100]), size(100, 80)),
        ints([50, 60, 99, 79])
    );
    // Ending exactly on the edge counts as out of bounds
    assert_eq!(
        xywh_to_xyxy(ints([0, 0, 10, 10]), size(10, 10)),
        ints([0, 0, 9, 9])
    );
}

#[test]
fn test_xywh_to_xyxy_expands_degenerate_box() {
    assert_eq!(
        xywh_to_xyxy(ints([5, 5, 0, 0]), size(10, 10)),
        ints([5, 5, 6, 6])
    );
}

#[test]
fn test_xywh_to_xyxy_box_past_edge() {
    assert_eq!(
        xywh_to_xyxy(ints([9, 9, 5, 5]), size(10, 10)),
        ints([9, 9, 10, 10])
    );
    assert_eq!(
        xywh_to_xyxy(ints([20, 3, 5, 2]), size(10, 10)),
        ints([9, 3, 10, 5])
    );
}

#[test]
fn test_xywh_to_xyxy_leaves_negative_coordinates() {
    assert_eq!(
        xywh_to_xyxy(ints([-5, -2, 3, 1]), size(10, 10)),
        ints([-5, -2, -2, -1])
    );
}

#[test]
fn test_xywh_to_xyxy_number_types() {
    // A float coordinate turns the sum into a float; the clamp takes the dimension's type
    assert_eq!(
        xywh_to_xyxy(
            [Coord::Float(1.5), Coord::Int(2), Coord::Int(20), Coord::Int(3)],
            size(10, 10)
        ),
        [Coord::Float(1.5), Coord::Int(2), Coord::Int(9), Coord::Int(5)]
    );
    assert_eq!(
        xywh_to_xyxy(ints([12, 0, 5, 1]), (Coord::Float(10.0), Coord::Float(10.0))),
        [Coord::Float(9.0), Coord::Int(0), Coord::Float(10.0), Coord::Int(1)]
    );
    // An unclamped integer start keeps the widened end an integer
    assert_eq!(
        xywh_to_xyxy(ints([9, 0, 5, 1]), (Coord::Float(10.0), Coord::Float(10.0))),
        [Coord::Int(9), Coord::Int(0), Coord::Int(10), Coord::Int(1)]
    );
}

#[test]
fn test_convert_keypoints() {
    let keypoints = ints([15, 3, 2, 4, 12, 1, -1, 0, 0, 9, 9, 2]);
    assert_eq!(
        convert_keypoints(&keypoints, size(10, 10)),
        vec![ints([9, 3, 2]), ints([4, 9, 1]), ints([-1, 0, 0]), ints([9, 9, 2])]
    );
    assert!(convert_keypoints(&[], size(10, 10)).is_empty());
}

#[test]
fn test_convert_keypoints_uses_each_axis_dimension() {
    assert_eq!(
        convert_keypoints(&ints([30, 30, 1]), size(40, 20)),
        vec![ints([30, 19, 1])]
    );
}

#[test]
fn test_convert_keypoints_keeps_visibility_as_given() {
    let keypoints = [Coord::Float(3.5), Coord::Int(12), Coord::Float(2.0)];
    assert_eq!(
        convert_keypoints(&keypoints, size(10, 10)),
        vec![[Coord::Float(3.5), Coord::Int(9), Coord::Float(2.0)]]
    );
}

#[test]
fn test_coord_json_keeps_number_form() {
    let values: Vec<Coord> = serde_json::from_str("[9, 9.0, -3, 1.5]").unwrap();
    assert_eq!(
        values,
        vec![
            Coord::Int(9),
            Coord::Float(9.0),
            Coord::Int(-3),
            Coord::Float(1.5)
        ]
    );
    assert_eq!(serde_json::to_string(&values).unwrap(), "[9,9.0,-3,1.5]");
}

#[test]
fn test_coord_arithmetic() {
    assert_eq!(Coord::Int(10) - Coord::ONE, Coord::Int(9));
    assert_eq!(Coord::Float(10.0) - Coord::ONE, Coord::Float(9.0));
    assert_eq!(Coord::Int(2) + Coord::Float(0.5), Coord::Float(2.5));
    assert!(Coord::Int(5).numeric_eq(Coord::Float(5.0)));
    assert!(Coord::Float(10.0).is_at_least(Coord::Int(10)));
    assert!(!Coord::Int(9).is_at_least(Coord::Float(9.5)));
}

#[test]
fn test_annotation_file_name() {
    assert_eq!(annotation_file_name("000001.jpg"), "000001.json");
    assert_eq!(annotation_file_name("robot.annotated.png"), "robot.json");
    assert_eq!(annotation_file_name("no_extension"), "no_extension.json");
    assert_eq!(annotation_file_name(".hidden.png"), ".json");
}

#[test]
fn test_grouped_annotations() {
    let annotations = vec![
        Annotation::new(1, ints([0, 0, 1, 1]), vec![]),
        Annotation::new(2, ints([1, 1, 1, 1]), vec![]),
        Annotation::new(1, ints([2, 2, 1, 1]), vec![]),
        Annotation::new(7, ints([3, 3, 1, 1]), vec![]),
    ];
    let grouped = GroupedAnnotations::new(annotations);

    let first = grouped.get(1);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].bbox[0], Coord::Int(0));
    assert_eq!(first[1].bbox[0], Coord::Int(2));
    assert_eq!(grouped.get(2).len(), 1);
    assert!(grouped.get(42).is_empty());

    let image_ids: HashSet<i64> = [1, 2].into_iter().collect();
    assert_eq!(grouped.count_orphans(&image_ids), 1);
}

#[test]
fn test_convert_annotations_is_index_aligned() {
    let image = Image::new(3, "robot.png", 10u32, 10u32);
    let annotations = vec![
        Annotation::new(3, ints([5, 5, 0, 0]), ints([15, 3, 2]).to_vec()),
        Annotation::new(3, ints([1, 1, 2, 2]), ints([1, 1, 2, 2, 2, 1]).to_vec()),
    ];

    let content = convert_annotations(&image, &annotations).unwrap();

    assert_eq!(content.len(), 2);
    assert_eq!(content.keypoints.len(), 2);
    assert_eq!(content.bboxes[0], ints([5, 5, 6, 6]));
    assert_eq!(content.keypoints[0], vec![ints([9, 3, 2])]);
    assert_eq!(content.bboxes[1], ints([1, 1, 3, 3]));
    assert_eq!(content.keypoints[1], vec![ints([1, 1, 2]), ints([2, 2, 1])]);
}

#[test]
fn test_convert_annotations_rejects_partial_keypoint_triple() {
    let image = Image::new(8, "robot.png", 10u32, 10u32);
    let annotations = vec![Annotation::new(8, ints([0, 0, 1, 1]), ints([1, 2]).to_vec())];

    match convert_annotations(&image, &annotations) {
        Err(ConvertError::MalformedKeypoints { image_id, len }) => {
            assert_eq!(image_id, 8);
            assert_eq!(len, 2);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
