use super::*;

fn face(bbox: [f64; 4], confidence: f64) -> FaceBox {
    FaceBox {
        bbox,
        confidence,
        center: [
            (bbox[0] + bbox[2]) / 2.0,
            (bbox[1] + bbox[3]) / 2.0,
        ],
    }
}

// =============================================================
// Scaling
// =============================================================

#[test]
fn half_scale_outline_position_and_size() {
    // 1000x500 source rendered at 500x250 => both scale factors 0.5.
    let faces = [face([100.0, 100.0, 300.0, 300.0], 0.9)];
    let commands = compute_overlay_geometry([1000, 500], 500.0, 250.0, &faces);

    assert_eq!(
        commands[0],
        DrawCommand::Outline {
            x: 50.0,
            y: 50.0,
            width: 100.0,
            height: 100.0,
        }
    );
}

#[test]
fn axes_scale_independently() {
    let faces = [face([0.0, 0.0, 100.0, 100.0], 0.5)];
    let commands = compute_overlay_geometry([200, 400], 400.0, 100.0, &faces);

    assert_eq!(
        commands[0],
        DrawCommand::Outline {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 25.0,
        }
    );
}

#[test]
fn identity_scale_passes_bbox_through() {
    let faces = [face([10.0, 20.0, 60.0, 90.0], 0.5)];
    let commands = compute_overlay_geometry([640, 480], 640.0, 480.0, &faces);

    assert_eq!(
        commands[0],
        DrawCommand::Outline {
            x: 10.0,
            y: 20.0,
            width: 50.0,
            height: 70.0,
        }
    );
}

// =============================================================
// Command structure
// =============================================================

#[test]
fn six_commands_per_face_in_input_order() {
    let faces = [
        face([0.0, 0.0, 50.0, 50.0], 0.9),
        face([100.0, 100.0, 200.0, 200.0], 0.8),
    ];
    let commands = compute_overlay_geometry([400, 400], 400.0, 400.0, &faces);

    assert_eq!(commands.len(), 12);
    assert!(matches!(commands[0], DrawCommand::Outline { .. }));
    for cmd in &commands[1..5] {
        assert!(matches!(cmd, DrawCommand::Corner { .. }));
    }
    assert!(matches!(commands[5], DrawCommand::Label { .. }));
    // Second face's outline starts where the first face's group ended.
    let DrawCommand::Outline { x, y, .. } = &commands[6] else {
        panic!("expected outline");
    };
    assert_eq!((*x, *y), (100.0, 100.0));
}

#[test]
fn corner_accents_have_fixed_leg_length() {
    let faces = [face([0.0, 0.0, 100.0, 100.0], 0.9)];
    let commands = compute_overlay_geometry([100, 100], 100.0, 100.0, &faces);

    // Top-left accent: down-leg, elbow, right-leg.
    let DrawCommand::Corner { points } = &commands[1] else {
        panic!("expected corner accent");
    };
    assert_eq!(points[0], Point { x: 0.0, y: 20.0 });
    assert_eq!(points[1], Point { x: 0.0, y: 0.0 });
    assert_eq!(points[2], Point { x: 20.0, y: 0.0 });

    // Bottom-right accent elbows on the opposite corner.
    let DrawCommand::Corner { points } = &commands[4] else {
        panic!("expected corner accent");
    };
    assert_eq!(points[1], Point { x: 100.0, y: 100.0 });
}

#[test]
fn label_numbering_and_confidence_precision() {
    let faces = [
        face([0.0, 0.0, 10.0, 10.0], 0.875),
        face([20.0, 20.0, 30.0, 30.0], 1.0),
    ];
    let commands = compute_overlay_geometry([100, 100], 100.0, 100.0, &faces);

    let DrawCommand::Label { title, detail, .. } = &commands[5] else {
        panic!("expected label");
    };
    assert_eq!(title, "Face 1");
    assert_eq!(detail, "87.5%");

    let DrawCommand::Label { title, detail, .. } = &commands[11] else {
        panic!("expected label");
    };
    assert_eq!(title, "Face 2");
    assert_eq!(detail, "100.0%");
}

// =============================================================
// Degenerate inputs
// =============================================================

#[test]
fn no_faces_no_commands() {
    let commands = compute_overlay_geometry([640, 480], 640.0, 480.0, &[]);
    assert!(commands.is_empty());
}

#[test]
fn zero_image_dimension_yields_nothing() {
    let faces = [face([0.0, 0.0, 10.0, 10.0], 0.5)];
    assert!(compute_overlay_geometry([0, 480], 640.0, 480.0, &faces).is_empty());
    assert!(compute_overlay_geometry([640, 0], 640.0, 480.0, &faces).is_empty());
}

#[test]
fn recomputation_is_deterministic() {
    let faces = [face([5.0, 5.0, 55.0, 45.0], 0.66)];
    let first = compute_overlay_geometry([200, 100], 400.0, 200.0, &faces);
    let second = compute_overlay_geometry([200, 100], 400.0, 200.0, &faces);
    assert_eq!(first, second);
}
