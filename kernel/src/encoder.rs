use shared::error::AppResult;

/// Renders a text payload as a scannable QR image.
pub trait QrEncoder: Send + Sync {
    /// Returns the encoded image as PNG bytes.
    fn encode(&self, payload: &str) -> AppResult<Vec<u8>>;
}
