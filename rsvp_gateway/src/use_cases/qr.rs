use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use std::fmt;
use std::io::Cursor;

use crate::use_cases::share::encode_component;

pub const QR_IMAGE_WIDTH: u32 = 300;

#[derive(Debug)]
pub enum QrError {
    Encode(qrcode::types::QrError),
    Image(image::ImageError),
}

impl fmt::Display for QrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrError::Encode(err) => write!(f, "qr encode error: {err}"),
            QrError::Image(err) => write!(f, "qr image error: {err}"),
        }
    }
}

impl std::error::Error for QrError {}

// Renders the verification QR for a confirmation code.
#[derive(Debug, Clone)]
pub struct QrImageGenerator {
    verification_url: String,
    width: u32,
}

impl QrImageGenerator {
    pub fn new(verification_url: impl Into<String>) -> Self {
        Self {
            verification_url: verification_url.into(),
            width: QR_IMAGE_WIDTH,
        }
    }

    // URL the QR points at; the venue page reads the code from the query string.
    pub fn verification_link(&self, code: &str) -> String {
        format!("{}?code={}", self.verification_url, encode_component(code))
    }

    pub fn render_png(&self, code: &str) -> Result<Vec<u8>, QrError> {
        let link = self.verification_link(code);
        let qr = QrCode::new(link.as_bytes()).map_err(QrError::Encode)?;
        let image = qr
            .render::<Luma<u8>>()
            .min_dimensions(self.width, self.width)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(QrError::Image)?;
        Ok(png)
    }
}
