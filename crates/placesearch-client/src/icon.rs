//! Download and decode of the small icon a place detail points at.

use image::DynamicImage;
use reqwest::{Client, Url};

use crate::error::TransportError;
use crate::types::PlaceIcon;

/// Fetches `url` with the caller's client and decodes the body as an image.
///
/// # Errors
///
/// - [`TransportError::InvalidUrl`] if `url` is not absolute.
/// - [`TransportError::Http`] on network failure or a non-2xx status.
/// - [`TransportError::ImageDecode`] if the body is not a supported image.
pub async fn fetch_icon(client: &Client, url: &str) -> Result<PlaceIcon, TransportError> {
    let parsed = Url::parse(url).map_err(|e| TransportError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    tracing::debug!(url, "fetching place icon");

    let response = client.get(parsed).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    let image = decode_icon(url, &bytes)?;

    Ok(PlaceIcon {
        url: url.to_string(),
        image,
    })
}

fn decode_icon(url: &str, bytes: &[u8]) -> Result<DynamicImage, TransportError> {
    image::load_from_memory(bytes).map_err(|source| TransportError::ImageDecode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn decodes_png_bytes() {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 3, Rgba([0, 0, 255, 255])))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");

        let image = decode_icon("https://example.test/pin.png", &bytes).expect("decode png");
        assert_eq!((image.width(), image.height()), (2, 3));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_icon("https://example.test/pin.png", b"not an image").unwrap_err();
        assert!(matches!(err, TransportError::ImageDecode { ref url, .. } if url.ends_with("pin.png")));
    }

    #[tokio::test]
    async fn relative_url_is_rejected_before_any_request() {
        let err = fetch_icon(&Client::new(), "/icons/pin.png").await.unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }
}
