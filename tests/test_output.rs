use std::path::Path;

use contrib_shooter::error::Error;
use contrib_shooter::output::{resolve_output, GifOutput, OutputProvider};

use image::RgbaImage;

fn solid_frame(r: u8) -> RgbaImage {
    RgbaImage::from_pixel(8, 8, image::Rgba([r, 40, 40, 255]))
}

#[test]
fn gif_provider_encodes_a_gif_byte_stream() {
    let provider = GifOutput::new("out.gif");
    let frames = vec![solid_frame(10), solid_frame(200)];
    let data = provider.encode(&mut frames.into_iter(), 20).unwrap();
    assert!(data.starts_with(b"GIF89a"));
}

#[test]
fn gif_provider_handles_an_empty_stream() {
    let provider = GifOutput::new("out.gif");
    let data = provider
        .encode(&mut std::iter::empty::<RgbaImage>(), 20)
        .unwrap();
    // No frames, nothing to encode.
    assert!(data.is_empty());
}

#[test]
fn resolver_picks_gif_by_extension() {
    let provider = resolve_output(Path::new("render/out.GIF")).unwrap();
    assert_eq!(provider.path(), Path::new("render/out.GIF"));
}

#[test]
fn resolver_rejects_unknown_extensions() {
    let err = resolve_output(Path::new("out.webp")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn resolver_rejects_missing_extensions() {
    let err = resolve_output(Path::new("out")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}
