use cat_gl_wasm::color::{parse_hex_color, WHITE};
use cat_gl_wasm::error::InputError;

#[test]
fn every_byte_maps_to_byte_over_255() {
    for byte in 0..=255u8 {
        let expected = f32::from(byte) / 255.0;

        let red = parse_hex_color(&format!("#{byte:02x}0000")).unwrap();
        let green = parse_hex_color(&format!("#00{byte:02x}00")).unwrap();
        let blue = parse_hex_color(&format!("#0000{byte:02X}")).unwrap();

        assert_eq!(red, [expected, 0.0, 0.0, 1.0]);
        assert_eq!(green, [0.0, expected, 0.0, 1.0]);
        assert_eq!(blue, [0.0, 0.0, expected, 1.0]);
        for channel in red.iter().chain(&green).chain(&blue) {
            assert!((0.0..=1.0).contains(channel));
        }
    }
}

#[test]
fn white_and_mixed_case() {
    assert_eq!(parse_hex_color("#ffffff").unwrap(), WHITE);
    assert_eq!(parse_hex_color("#FfFfFf").unwrap(), WHITE);
    let grey = parse_hex_color("#333333").unwrap();
    assert_eq!(grey, [0.2, 0.2, 0.2, 1.0]);
}

#[test]
fn malformed_values_are_rejected() {
    for raw in [
        "", "#", "ff0000", "#ff00", "#ff00001", "#gg0000", "#ff 000", "#+f0000", "#ｆｆ00",
    ] {
        assert_eq!(
            parse_hex_color(raw),
            Err(InputError::BadHexColor(raw.to_string())),
            "{raw:?} should not parse"
        );
    }
}
