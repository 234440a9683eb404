use crate::domain::ports::{Storage, TextExtractor};
use crate::utils::error::Result;

/// Reads documents whose text layer is already plain text.
///
/// Invalid UTF-8 is replaced rather than rejected, and a leading byte order
/// mark is dropped.
#[derive(Debug, Clone)]
pub struct PlainTextExtractor<S: Storage> {
    storage: S,
}

impl<S: Storage> PlainTextExtractor<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> TextExtractor for PlainTextExtractor<S> {
    async fn extract_text(&self, path: &str) -> Result<String> {
        let bytes = self.storage.read_file(path).await?;
        Ok(decode_text(&bytes))
    }
}

pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
}
