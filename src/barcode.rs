//! Order-token QR code rendering.
//!
//! A purely local operation: the literal payload `order:{token}` is encoded
//! as a QR code at medium error correction and rendered as a grayscale PNG,
//! returned Base64-encoded so it can be dropped into a data URI or an email
//! template.

use base64::prelude::*;
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};
use thiserror::Error;

/// Error correction level used for all generated codes.
const EC_LEVEL: EcLevel = EcLevel::M;

/// Minimum rendered image size in pixels.
const MIN_SIZE: u32 = 128;

/// Quiet-zone width around the symbol, in modules.
const QUIET_ZONE: u32 = 4;

/// Error type for QR generation.
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// The payload could not be encoded as a QR symbol.
    #[error("QR encoding failed: {0}")]
    Qr(#[from] QrError),

    /// The rendered image could not be PNG-encoded.
    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Encodes `payload` as a QR code and returns the PNG as standard Base64.
///
/// The symbol is rendered at medium error correction with a four-module
/// quiet zone, scaled to at least [`MIN_SIZE`] pixels square.
///
/// # Errors
///
/// Returns [`BarcodeError`] when the payload cannot be encoded or the
/// image cannot be written.
///
/// # Example
///
/// ```rust
/// use base64::prelude::*;
///
/// let encoded = snipcart_api::barcode::qr_png_base64("order:abc123").unwrap();
/// let png = BASE64_STANDARD.decode(encoded).unwrap();
/// assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
/// ```
pub fn qr_png_base64(payload: &str) -> Result<String, BarcodeError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EC_LEVEL)?;

    // Symbol width is bounded at 177 modules, so u32 arithmetic cannot overflow.
    let width = code.width() as u32;
    let modules = width + QUIET_ZONE * 2;
    let scale = ((MIN_SIZE + modules - 1) / modules).max(1);
    let size = modules * scale;

    let mut img = image::GrayImage::from_pixel(size, size, image::Luma([255]));
    for (idx, color) in code.to_colors().iter().enumerate() {
        if *color == Color::Dark {
            let idx = idx as u32;
            let x0 = (idx % width + QUIET_ZONE) * scale;
            let y0 = (idx / width + QUIET_ZONE) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x0 + dx, y0 + dy, image::Luma([0]));
                }
            }
        }
    }

    let mut png = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)?;

    Ok(BASE64_STANDARD.encode(png))
}

impl crate::resources::Order {
    /// Renders this order's token as a scannable QR code.
    ///
    /// The encoded payload is always the literal string `order:{token}`.
    /// The result is a Base64-encoded PNG.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError`] when encoding fails.
    pub fn token_qr_png_base64(&self) -> Result<String, BarcodeError> {
        qr_png_base64(&format!("order:{}", self.token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Order;

    #[test]
    fn test_output_is_base64_encoded_png() {
        let encoded = qr_png_base64("order:b35990df-c0ca-4014-94de-1caa7bd7bb51").unwrap();
        let png = BASE64_STANDARD.decode(encoded).unwrap();

        // PNG signature
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_rendered_image_is_square_and_at_least_min_size() {
        let encoded = qr_png_base64("order:abc123").unwrap();
        let png = BASE64_STANDARD.decode(encoded).unwrap();

        let img = image::load_from_memory(&png).unwrap();
        assert!(img.width() >= MIN_SIZE);
        assert_eq!(img.width(), img.height());
    }

    #[test]
    fn test_output_is_deterministic() {
        let a = qr_png_base64("order:abc123").unwrap();
        let b = qr_png_base64("order:abc123").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_payloads_produce_distinct_images() {
        let a = qr_png_base64("order:abc123").unwrap();
        let b = qr_png_base64("order:def456").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_order_token_payload_is_prefixed() {
        let order = Order {
            token: "abc123".to_string(),
            ..Order::default()
        };

        // The order helper must encode exactly "order:{token}".
        assert_eq!(
            order.token_qr_png_base64().unwrap(),
            qr_png_base64("order:abc123").unwrap()
        );
    }

    #[test]
    fn test_symbol_matrix_matches_direct_encoding() {
        let direct = QrCode::with_error_correction_level(b"order:abc123", EC_LEVEL).unwrap();
        let again = QrCode::with_error_correction_level(b"order:abc123", EC_LEVEL).unwrap();
        assert_eq!(direct.to_colors(), again.to_colors());
    }
}
