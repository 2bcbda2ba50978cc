// tests/drawing_flow.rs
//
// Routing of drawing strings and the overlays they produce, the way the
// input field drives them: every keystroke re-parses the whole string and
// the previous overlay set is discarded.
//
use board_speaker::config::consts::EXAMPLE_ANNOTATION;
use board_speaker::core::annotate::{build_overlays, parse_drawing, Overlay};
use board_speaker::core::board::{Orientation, Square};
use board_speaker::core::commands::{classify, CommandKind, InputClass};

#[test]
fn sentinel_routes_to_drawing_not_commands() {
    assert_eq!(classify("-e5"), InputClass::Drawing);
    assert_eq!(classify("-e5,g7f6"), InputClass::Drawing);
    // Without the sentinel the same text is just an invalid command.
    assert_eq!(classify("e5,g7f6"), InputClass::Invalid);
}

#[test]
fn example_annotation_is_itself_a_valid_drawing() {
    assert_eq!(
        classify("p-annotate"),
        InputClass::Matched(CommandKind::AnnotateExample)
    );
    let cmd = parse_drawing(EXAMPLE_ANNOTATION).unwrap();
    assert_eq!(cmd.arrows.len(), 2);
    assert!(cmd.circles.is_empty());
}

#[test]
fn each_parse_replaces_the_previous_drawing() {
    // Simulates typing "-e5" then backspacing to "-d4": only the latest
    // string matters.
    let first = parse_drawing("-e5").unwrap();
    let second = parse_drawing("-d4").unwrap();
    assert_eq!(first.circles, [Square::parse("e5").unwrap()]);
    assert_eq!(second.circles, [Square::parse("d4").unwrap()]);
}

#[test]
fn overlays_follow_orientation() {
    let cmd = parse_drawing("-e5").unwrap();
    let white = build_overlays(&cmd, 480.0, Orientation::WhitePov);
    let black = build_overlays(&cmd, 480.0, Orientation::BlackPov);

    let center = |shapes: &[Overlay]| match shapes[0] {
        Overlay::Circle { center, .. } => center,
        ref other => panic!("expected circle, got {other:?}"),
    };

    let (wx, wy) = center(&white);
    let (bx, by) = center(&black);
    // Same square, opposite corners of the view.
    assert_eq!((bx, by), (480.0 - wx, 480.0 - wy));
}

#[test]
fn circle_radius_is_half_a_square() {
    let cmd = parse_drawing("-a1").unwrap();
    match build_overlays(&cmd, 480.0, Orientation::WhitePov)[0] {
        Overlay::Circle { radius, .. } => assert_eq!(radius, 30.0),
        ref other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn mixed_good_and_bad_tokens_still_draw() {
    let cmd = parse_drawing("-zz,e5,g7f6,toolong").unwrap();
    let shapes = build_overlays(&cmd, 480.0, Orientation::WhitePov);
    assert_eq!(shapes.len(), 2);
    assert!(matches!(shapes[0], Overlay::Circle { .. }));
    assert!(matches!(shapes[1], Overlay::Arrow { .. }));
}

#[test]
fn free_typed_accents_neither_draw_nor_crash() {
    // The field feeds the parser on every keystroke, so whatever the
    // keyboard can produce has to come out as "nothing to draw".
    assert_eq!(classify("-a\u{e9}"), InputClass::Drawing);
    let cmd = parse_drawing("-a\u{e9}").unwrap();
    assert!(cmd.is_empty());
    assert!(build_overlays(&cmd, 480.0, Orientation::WhitePov).is_empty());
}

#[test]
fn bare_sentinel_draws_nothing_but_is_not_an_error() {
    assert_eq!(classify("-"), InputClass::Drawing);
    let cmd = parse_drawing("-").unwrap();
    assert!(cmd.is_empty());
    assert!(build_overlays(&cmd, 480.0, Orientation::WhitePov).is_empty());
}
