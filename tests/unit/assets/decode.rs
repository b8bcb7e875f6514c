use std::io::Cursor;
use std::path::PathBuf;

use super::*;

fn encode(img: image::RgbaImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

#[test]
fn decode_png_dimensions_and_premul() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100, 50, 200, 128]).unwrap();
    let grid = decode_image(&encode(img, image::ImageFormat::Png)).unwrap();
    assert_eq!(grid.width(), 1);
    assert_eq!(grid.height(), 1);
    assert_eq!(
        grid.as_bytes(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_tiff_is_supported() {
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([9, 8, 7, 255]));
    let grid = decode_image(&encode(img, image::ImageFormat::Tiff)).unwrap();
    assert_eq!((grid.width(), grid.height()), (3, 2));
    assert_eq!(grid.get(2, 1).unwrap().to_array(), [9, 8, 7, 255]);
}

#[test]
fn decode_jpeg_is_supported() {
    let img = image::RgbImage::from_pixel(16, 8, image::Rgb([0, 0, 0]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Jpeg)
        .unwrap();
    let grid = decode_image(&buf).unwrap();
    assert_eq!((grid.width(), grid.height()), (16, 8));
    assert_eq!(grid.get(0, 0).unwrap().a, 255);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(decode_image(b"definitely not an image").is_err());
}

#[test]
fn open_image_reports_missing_file_as_open_error() {
    let path = PathBuf::from("target").join("no_such_dir").join("missing.png");
    let err = open_image(&path).unwrap_err();
    assert!(matches!(err, CoverError::Open { .. }), "{err:?}");
}

#[test]
fn open_image_reports_corrupt_file_as_decode_error() {
    let dir = PathBuf::from("target").join("decode_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("corrupt.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nnope").unwrap();

    let err = open_image(&path).unwrap_err();
    assert!(matches!(err, CoverError::Decode { .. }), "{err:?}");
}
