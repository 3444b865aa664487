//! Integration tests for token accumulation on the command builder.

use magick_cmd::args::{BuildError, Definitions, GeometrySpec, OptionId};
use magick_cmd::{CommandState, MagickCommand};
use serde_json::json;

const EXPECTED_CHAIN: &str = "-define 'jpeg:size=256x256' image.png -auto-orient -fuzz 5 -trim +repage -strip -thumbnail '128x128>' -unsharp '0x0.5+1+0.05' out.png";

// =============================================================================
// CHAINED CALLS
// =============================================================================

#[test]
fn chained_calls_produce_expected_line() {
    let mut cmd = MagickCommand::new();
    cmd.define(Definitions::new().set_sub("jpeg", "size", json!({"width": 256, "height": 256})))
        .unwrap()
        .add("image.png")
        .auto_orient()
        .fuzz(5)
        .trim()
        .reset(OptionId::Repage)
        .strip()
        .thumbnail(GeometrySpec::size(128, 128).only_shrink())
        .unwrap()
        .unsharp(0.5)
        .add("out.png");

    assert_eq!(cmd.arg_string(), EXPECTED_CHAIN);
    assert_eq!(cmd.command_line(), format!("convert {}", EXPECTED_CHAIN));
}

#[test]
fn chained_calls_by_name() {
    let mut cmd = MagickCommand::new();
    cmd.option("define", Some(&json!({"jpeg": {"size": {"width": 256, "height": 256}}})))
        .unwrap()
        .option("add", Some(&json!("image.png")))
        .unwrap()
        .option("autoOrient", None)
        .unwrap()
        .option("fuzz", Some(&json!(5)))
        .unwrap()
        .option("trim", None)
        .unwrap()
        .option("repage", Some(&json!(true)))
        .unwrap()
        .option("strip", None)
        .unwrap()
        .option("thumbnail", Some(&json!({"width": 128, "height": 128, "onlyShrink": true})))
        .unwrap()
        .option("unsharp", Some(&json!(0.5)))
        .unwrap()
        .option("add", Some(&json!("out.png")))
        .unwrap();

    assert_eq!(cmd.arg_string(), EXPECTED_CHAIN);
}

#[test]
fn unknown_option_does_not_mutate() {
    let mut cmd = MagickCommand::new();
    cmd.strip();
    let before = cmd.args().to_vec();

    let err = cmd.option("sparkle", Some(&json!(1))).unwrap_err();
    assert_eq!(err, BuildError::UnknownOption { name: "sparkle".to_string() });
    assert_eq!(cmd.args(), before.as_slice());

    assert!(cmd.reset_option("sparkle").is_err());
    assert_eq!(cmd.args(), before.as_slice());
}

#[test]
fn failing_geometry_appends_nothing() {
    let mut cmd = MagickCommand::new();
    cmd.add("in.png");
    assert!(cmd.resize(GeometrySpec::default().with_offset(1, 1)).is_err());
    assert_eq!(cmd.args(), ["in.png"]);
}

#[test]
fn quoted_values_escape_quotes() {
    let mut cmd = MagickCommand::new();
    cmd.label("it's here").font("DejaVu Sans");
    assert_eq!(cmd.arg_string(), r"-label 'it'\''s here' -font 'DejaVu Sans'");
}

#[test]
fn add_all_appends_literal_tokens() {
    let mut cmd = MagickCommand::new();
    cmd.add_all(["-set", "comment", "hello"]).add("out.png");
    assert_eq!(cmd.arg_string(), "-set comment hello out.png");
}

// =============================================================================
// DECLARATIVE LISTS
// =============================================================================

#[test]
fn declarative_list_matches_chain() {
    let items = vec![
        json!({"define": {"jpeg": {"size": {"width": 256, "height": 256}}}}),
        json!({"add": "image.png"}),
        json!("autoOrient"),
        json!({"fuzz": 5}),
        json!("trim"),
        json!({"repage": true}),
        json!("strip"),
        json!({"thumbnail": {"width": 128, "height": 128, "onlyShrink": true}}),
        json!({"unsharp": 0.5}),
        json!({"add": "out.png"}),
    ];
    let cmd = MagickCommand::from_args(&items).unwrap();
    assert_eq!(cmd.arg_string(), EXPECTED_CHAIN);
    assert_eq!(cmd.state(), CommandState::Accumulating);
}

#[test]
fn multi_key_object_applies_keys_in_order() {
    let cmd = MagickCommand::from_args(&[json!({"strip": null, "quality": 90, "trim": null})]).unwrap();
    assert_eq!(cmd.arg_string(), "-strip -quality 90 -trim");
}

#[test]
fn bare_boolean_item_is_ignored() {
    let cmd = MagickCommand::from_args(&[json!(true), json!("strip")]).unwrap();
    assert_eq!(cmd.arg_string(), "-strip");
}

#[test]
fn unsupported_item_types() {
    let err = MagickCommand::from_args(&[json!(42)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported argument type `number` of argument `42`"
    );

    let err = MagickCommand::from_args(&[json!(["strip"])]).unwrap_err();
    assert!(matches!(
        err,
        BuildError::UnsupportedArgumentType { ref kind, .. } if kind == "array"
    ));

    let err = MagickCommand::from_args(&[json!(null)]).unwrap_err();
    assert!(matches!(err, BuildError::UnsupportedArgumentType { .. }));
}

#[test]
fn unknown_name_in_list() {
    let err = MagickCommand::from_args(&[json!("sparkle")]).unwrap_err();
    assert_eq!(err.to_string(), "No such option `sparkle`");

    let err = MagickCommand::from_args(&[json!({"sparkle": 3})]).unwrap_err();
    assert_eq!(err.to_string(), "No such option `sparkle`");
}

#[test]
fn empty_list_stays_idle() {
    let cmd = MagickCommand::from_args(&[]).unwrap();
    assert_eq!(cmd.state(), CommandState::Idle);
    assert!(cmd.args().is_empty());
}
