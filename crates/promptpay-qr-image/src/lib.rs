//! QR image rendering for payload strings.
//!
//! The codec crate produces a finished payload string; this crate turns it
//! into pixel data. Rendering always uses the highest error-correction
//! level so a centered logo can cover part of the code without breaking
//! scans. Persisting the bytes to disk stays with the caller.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

/// Error type for QR rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("qr encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("image processing failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Render a payload string as a PNG QR code at least `size` pixels per side.
pub fn render_png(payload: &str, size: u32) -> Result<Vec<u8>, RenderError> {
    let code = render(payload, size)?;
    encode_png(DynamicImage::ImageLuma8(code))
}

/// Render a payload string as a PNG QR code with a logo composited in the
/// center.
///
/// `logo` is an encoded image in any format the `image` crate detects; it is
/// drawn as-is, so the caller sizes it to stay within the error-correction
/// margin of the code.
pub fn render_png_with_logo(
    payload: &str,
    size: u32,
    logo: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut canvas = DynamicImage::ImageLuma8(render(payload, size)?).to_rgba8();
    let logo = image::load_from_memory(logo)?.to_rgba8();

    let x = (i64::from(canvas.width()) - i64::from(logo.width())) / 2;
    let y = (i64::from(canvas.height()) - i64::from(logo.height())) / 2;
    image::imageops::overlay(&mut canvas, &logo, x, y);

    encode_png(DynamicImage::ImageRgba8(canvas))
}

fn render(payload: &str, size: u32) -> Result<image::GrayImage, RenderError> {
    let code = QrCode::with_error_correction_level(payload, EcLevel::H)?;
    Ok(code.render::<Luma<u8>>().min_dimensions(size, size).build())
}

fn encode_png(image: DynamicImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use promptpay_qr::transfer::{self, TransferCmd};

    fn payload() -> String {
        transfer::encode(&TransferCmd {
            proxy_id: "0909764856".into(),
            ..TransferCmd::default()
        })
        .unwrap()
    }

    fn tiny_logo() -> Vec<u8> {
        let logo = RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 255]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(logo)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn renders_png_at_requested_size() {
        let png = render_png(&payload(), 512).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert!(decoded.width() >= 512);
        assert_eq!(decoded.width(), decoded.height());
        // PNG signature.
        assert_eq!(&png[..4], b"\x89PNG");
    }

    #[test]
    fn logo_overlay_changes_the_center() {
        let png = render_png_with_logo(&payload(), 512, &tiny_logo()).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        let center = *decoded.get_pixel(decoded.width() / 2, decoded.height() / 2);
        assert_eq!(center, Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn oversized_payload_is_an_error() {
        assert!(render_png(&"9".repeat(8000), 512).is_err());
    }
}
