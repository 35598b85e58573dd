//! Embedded image payloads.
//!
//! Uploaded image bytes are stored inline as standard base64 text next to
//! their declared MIME type.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Content type recorded when the upload did not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Encode raw upload bytes for storage.
pub fn encode_image_data(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode stored image data back into raw bytes.
pub fn decode_image_data(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(data)
}

/// Build a `data:` URI suitable for an `<img src>` attribute.
///
/// # Examples
///
/// ```
/// use gamevault_core::image::data_uri;
/// assert_eq!(data_uri("image/png", "AAEC"), "data:image/png;base64,AAEC");
/// ```
pub fn data_uri(content_type: &str, data: &str) -> String {
    format!("data:{content_type};base64,{data}")
}
