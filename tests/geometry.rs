//! Integration tests for the geometry formatter.

use magick_cmd::args::{geometry, BuildError, Geometry, GeometrySpec};
use serde_json::json;

// =============================================================================
// SIZE BRANCHES
// =============================================================================

#[test]
fn width_and_height_without_modifier() {
    assert_eq!(geometry(&json!({"width": 640, "height": 480})).unwrap(), "640x480");
}

#[test]
fn each_modifier_appends_its_suffix() {
    let cases = [
        (json!({"width": 10, "height": 20, "onlyShrink": true}), "10x20>"),
        (json!({"width": 10, "height": 20, "onlyEnlarge": true}), "10x20<"),
        (json!({"width": 10, "height": 20, "fill": true}), "10x20^"),
        (json!({"width": 10, "height": 20, "preserveAspect": false}), "10x20!"),
        (json!({"width": 10, "height": 20, "preserveAspect": true}), "10x20"),
    ];
    for (spec, expected) in cases {
        assert_eq!(geometry(&spec).unwrap(), expected, "spec {}", spec);
    }
}

#[test]
fn higher_priority_modifier_wins() {
    let spec = json!({"width": 1, "height": 2, "onlyShrink": true, "onlyEnlarge": true, "fill": true});
    assert_eq!(geometry(&spec).unwrap(), "1x2>");

    let spec = json!({"width": 1, "height": 2, "onlyEnlarge": true, "fill": true});
    assert_eq!(geometry(&spec).unwrap(), "1x2<");

    let spec = json!({"width": 1, "height": 2, "preserveAspect": false, "onlyShrink": true});
    assert_eq!(geometry(&spec).unwrap(), "1x2!");
}

#[test]
fn fill_with_offsets() {
    let spec = json!({"width": 20, "height": 30, "fill": true, "offsetX": 30, "offsetY": -20});
    assert_eq!(geometry(&spec).unwrap(), "20x30^+30-20");
}

#[test]
fn scale_area_and_percent_pairs() {
    assert_eq!(geometry(&json!({"scale": 20})).unwrap(), "20%");
    assert_eq!(geometry(&json!({"area": 10000})).unwrap(), "10000@");
    assert_eq!(
        geometry(&json!({"scaleWidth": 50, "scaleHeight": 25})).unwrap(),
        "50%x25%"
    );
}

#[test]
fn opacity_forms() {
    assert_eq!(geometry(&json!({"opacity": 30, "sigma": 0.4})).unwrap(), "30x0.4");
    assert_eq!(geometry(&json!({"opacity": 30})).unwrap(), "30");
}

#[test]
fn opacity_outranks_size() {
    assert_eq!(
        geometry(&json!({"opacity": 5, "width": 10, "height": 10})).unwrap(),
        "5"
    );
}

#[test]
fn percentage_offset() {
    let spec = json!({"width": 128, "height": 128, "onlyShrink": true, "offsetX": 10, "offsetY": 5, "usePercentage": true});
    assert_eq!(geometry(&spec).unwrap(), "128x128>+10+5%");
}

// =============================================================================
// ERRORS AND PASS-THROUGH
// =============================================================================

#[test]
fn unknown_key_is_rejected() {
    let err = geometry(&json!({"wrongKey": 1})).unwrap_err();
    assert!(matches!(err, BuildError::UnrecognizedGeometry { .. }));
    assert!(err.to_string().contains("wrongKey"));
    assert!(err.to_string().ends_with("is not an accepted option"));
}

#[test]
fn error_lists_object_keys_in_object_order() {
    let err = geometry(&json!({"wrongKey": 1, "offsetX": 5})).unwrap_err();
    assert_eq!(err.to_string(), "`wrongKey,offsetX` is not an accepted option");

    let err = geometry(&json!({"fill": false, "bogus": 1})).unwrap_err();
    assert_eq!(err.to_string(), "`fill,bogus` is not an accepted option");
}

#[test]
fn string_and_bool_values_are_rendered_verbatim() {
    assert_eq!(geometry(&json!({"width": "50%"})).unwrap(), "50%");
    assert_eq!(geometry(&json!({"height": "25%"})).unwrap(), "x25%");
    assert_eq!(geometry(&json!({"width": 100, "height": "abc"})).unwrap(), "100xabc");
    assert_eq!(geometry(&json!({"width": true})).unwrap(), "true");
    assert_eq!(geometry(&json!({"scale": "33.3"})).unwrap(), "33.3%");
    assert_eq!(geometry(&json!({"scale": false})).unwrap(), "false%");
}

#[test]
fn truthy_modifiers() {
    let spec = json!({"width": 8, "height": 8, "onlyShrink": 1, "offsetX": 2, "usePercentage": "yes"});
    assert_eq!(geometry(&spec).unwrap(), "8x8>+2+0%");

    let spec = json!({"width": 8, "height": 8, "onlyEnlarge": "", "fill": null});
    assert_eq!(geometry(&spec).unwrap(), "8x8");
}

#[test]
fn scalars_pass_through() {
    assert_eq!(geometry(&json!(20)).unwrap(), "20");
    assert_eq!(geometry(&json!("100x100+5+5")).unwrap(), "100x100+5+5");

    let once = geometry(&json!(20)).unwrap();
    let twice = geometry(&json!(once.clone())).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn typed_specs() {
    assert_eq!(
        Geometry::from(GeometrySpec::size(128, 128).only_shrink()).format().unwrap(),
        "128x128>"
    );
    assert_eq!(
        Geometry::from(GeometrySpec::percent(50).with_offset_x(-3)).format().unwrap(),
        "50%-3+0"
    );
    assert_eq!(Geometry::from(64u32).format().unwrap(), "64");
    assert!(Geometry::from(GeometrySpec::default()).format().is_err());
}
