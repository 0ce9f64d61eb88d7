use base64::{Engine, engine::general_purpose::STANDARD};
use qrcode::QrCode;
use qrcode::render::svg;

#[derive(Debug, thiserror::Error)]
pub enum QrCodeError {
    #[error("Payload cannot be encoded as a QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Turns an identifier into a renderable image payload.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self, payload: &str) -> Result<String, QrCodeError>;
}

/// Renders QR codes as base64 SVG data URLs.
#[derive(Debug, Clone)]
pub struct QrCodeGenerator {
    min_size: u32,
}

impl QrCodeGenerator {
    pub fn new(min_size: u32) -> Self {
        Self { min_size }
    }
}

impl Default for QrCodeGenerator {
    fn default() -> Self {
        Self::new(200)
    }
}

impl CodeGenerator for QrCodeGenerator {
    fn generate(&self, payload: &str) -> Result<String, QrCodeError> {
        let code = QrCode::new(payload.as_bytes())?;
        let image = code
            .render::<svg::Color>()
            .min_dimensions(self.min_size, self.min_size)
            .build();

        Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(image)))
    }
}
