use std::io::Write;

use json_coding::{
    from_slice, from_url, to_vec, Base64, CodingError, DecodeError, EdgeInsets, JsonError,
    PrintOptions, Rect,
};

#[test]
fn typed_file_read() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(br#"[{"x": 0, "y": 0, "w": 10, "h": 5}]"#)
        .expect("write fixture");

    let rects: Vec<Rect> = from_url(file.path().to_str().expect("utf-8 path")).expect("decode");
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].size.width, 10.0);
    assert_eq!(rects[0].size.height, 5.0);
}

#[test]
fn invalid_locator_surfaces_from_the_text_layer() {
    let err = from_url::<Rect>("https://example.com/rect.json").unwrap_err();
    assert!(matches!(err, CodingError::Json(JsonError::InvalidUrl(_))));
}

#[test]
fn typed_bytes_round_trip() {
    let insets = EdgeInsets { top: 1.0, left: 2.0, right: 3.0, bottom: 4.0 };
    let bytes = to_vec(&insets, PrintOptions::Compact).expect("encode");
    assert_eq!(bytes, br#"{"t":1,"l":2,"r":3,"b":4}"#.to_vec());
    assert_eq!(from_slice::<EdgeInsets>(&bytes).expect("decode"), insets);

    let blob = Base64(vec![0, 255, 7]);
    let bytes = to_vec(&blob, PrintOptions::Compact).expect("encode");
    assert_eq!(from_slice::<Base64>(&bytes).expect("decode"), blob);
}

#[test]
fn decode_error_is_innermost() {
    let err = from_slice::<Vec<Rect>>(br#"[{"x": 0, "y": 0, "w": "wide", "h": 5}]"#).unwrap_err();
    match err {
        CodingError::Decode(DecodeError::IncorrectValueType(v)) => {
            assert_eq!(v.as_str(), Some("wide"))
        }
        other => panic!("unexpected error {other:?}"),
    }
}
