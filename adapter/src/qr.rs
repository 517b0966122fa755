use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use kernel::encoder::QrEncoder;
use qrcode::QrCode;
use shared::error::{AppError, AppResult};

#[derive(Default)]
pub struct PngQrEncoder;

impl QrEncoder for PngQrEncoder {
    fn encode(&self, payload: &str) -> AppResult<Vec<u8>> {
        let code =
            QrCode::new(payload.as_bytes()).map_err(|e| AppError::QrCodeError(e.to_string()))?;
        let image = code.render::<Luma<u8>>().quiet_zone(true).build();

        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| AppError::QrCodeError(e.to_string()))?;
        Ok(bytes)
    }
}
