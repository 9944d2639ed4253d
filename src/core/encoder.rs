use std::io::Write;
use std::sync::OnceLock;

use base64::prelude::{Engine as _, BASE64_STANDARD};

use crate::domain::model::{DATA_URI_PREFIX, LOGO_SVG, SVG_MIME};
use crate::utils::error::{LogoError, Result};

/// Builds `data:<mime>;base64,<payload>` with the standard padded alphabet.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes))
}

/// The logo as a data URI, encoded on first use.
pub fn logo_data_uri() -> &'static str {
    static LOGO_URI: OnceLock<String> = OnceLock::new();
    LOGO_URI.get_or_init(|| encode_data_uri(SVG_MIME, LOGO_SVG.as_bytes()))
}

/// Decodes the payload of a logo data URI back to the raw markup bytes.
pub fn decode_payload(uri: &str) -> Result<Vec<u8>> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| LogoError::InvalidDataUriError {
            reason: format!("expected prefix '{}'", DATA_URI_PREFIX),
        })?;

    Ok(BASE64_STANDARD.decode(payload)?)
}

/// Writes the logo data URI as a single line and flushes the writer.
pub fn emit<W: Write>(writer: &mut W) -> Result<()> {
    let uri = logo_data_uri();
    tracing::debug!("Emitting {} byte data URI", uri.len());

    writeln!(writer, "{}", uri)?;
    writer.flush()?;
    Ok(())
}
