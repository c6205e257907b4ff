use super::*;

#[test]
fn table_is_fixed() {
    let cases = [
        (AspectRatio::Portrait9x16, 1080, 1920),
        (AspectRatio::Landscape16x9, 1920, 1080),
        (AspectRatio::Square1x1, 1080, 1080),
        (AspectRatio::Portrait4x5, 1080, 1350),
    ];
    for (ratio, w, h) in cases {
        assert_eq!(
            resolve_dimensions(ratio),
            Dimensions {
                width: w,
                height: h
            },
            "{ratio:?}"
        );
    }
}

#[test]
fn unknown_selectors_resolve_to_1920x1080() {
    for s in ["", "21:9", "16:10", "portrait", "9x16"] {
        assert_eq!(
            resolve_dimensions_str(s),
            Dimensions {
                width: 1920,
                height: 1080
            },
            "{s:?}"
        );
    }
}

#[test]
fn every_entry_is_a_valid_yuv420_canvas() {
    for ratio in AspectRatio::ALL {
        let d = resolve_dimensions(ratio);
        Dimensions::new(d.width, d.height).unwrap();
    }
}
