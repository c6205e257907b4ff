use super::*;

#[test]
fn transition_selectors_parse() {
    assert_eq!(TransitionKind::parse("fade"), TransitionKind::Fade);
    assert_eq!(TransitionKind::parse(" Dissolve "), TransitionKind::Dissolve);
    assert_eq!(TransitionKind::parse("slide_left"), TransitionKind::SlideLeft);
    assert_eq!(TransitionKind::parse("slide_right"), TransitionKind::SlideRight);
    assert_eq!(TransitionKind::parse("zoom"), TransitionKind::Zoom);
}

#[test]
fn unknown_transition_falls_back_to_dissolve() {
    assert_eq!(TransitionKind::parse("spiral"), TransitionKind::Dissolve);
    assert_eq!(TransitionKind::parse(""), TransitionKind::Dissolve);
}

#[test]
fn selectors_round_trip_through_as_str() {
    for k in TransitionKind::ALL {
        assert_eq!(TransitionKind::parse(k.as_str()), k);
    }
    for r in AspectRatio::ALL {
        assert_eq!(AspectRatio::parse(r.as_str()), r);
    }
}

#[test]
fn unknown_aspect_falls_back_to_landscape() {
    assert_eq!(AspectRatio::parse("21:9"), AspectRatio::Landscape16x9);
    assert_eq!(AspectRatio::parse("square"), AspectRatio::Landscape16x9);
}

#[test]
fn settings_default_matches_app_defaults() {
    let s = Settings::default();
    assert_eq!(s.transition_kind, TransitionKind::Dissolve);
    assert_eq!(s.transition_duration, 0.8);
    assert_eq!(s.aspect_ratio, AspectRatio::Landscape16x9);
}

#[test]
fn settings_deserialize_leniently() {
    let s: Settings = serde_json::from_value(serde_json::json!({
        "transition": "wobble",
        "duration": 1.5,
        "aspectRatio": "4:5"
    }))
    .unwrap();
    assert_eq!(s.transition_kind, TransitionKind::Dissolve);
    assert_eq!(s.transition_duration, 1.5);
    assert_eq!(s.aspect_ratio, AspectRatio::Portrait4x5);

    let s: Settings = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn settings_serialize_canonical_selectors() {
    let s = Settings {
        transition_kind: TransitionKind::SlideRight,
        transition_duration: 0.5,
        aspect_ratio: AspectRatio::Portrait9x16,
    };
    let v = serde_json::to_value(s).unwrap();
    assert_eq!(v["transition_kind"], "slide_right");
    assert_eq!(v["aspect_ratio"], "9:16");
}

#[test]
fn request_parses_with_optional_fields() {
    let json = r#"{
        "images": [{ "path": "a.jpg", "width": 4000, "height": 3000 }, { "path": "b.jpg" }],
        "output": "out.mp4"
    }"#;
    let req = SlideshowRequest::from_reader(json.as_bytes()).unwrap();
    assert_eq!(req.images.len(), 2);
    assert_eq!(req.images[0].width, Some(4000));
    assert_eq!(req.images[1], ImageInput::new("b.jpg"));
    assert!(req.audio.is_none());
    assert_eq!(req.settings, Settings::default());
}

#[test]
fn request_parse_error_is_serde_error() {
    let err = SlideshowRequest::from_reader("{".as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}
