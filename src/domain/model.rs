/// Media type declared in the logo's data URI.
pub const SVG_MIME: &str = "image/svg+xml";

/// Prefix every logo data URI starts with.
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// 40x40 logo: a bold cyan "V" centred on a transparent canvas.
pub const LOGO_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 40 40">"#,
    r##"<text x="20" y="28" font-size="24" font-weight="bold" fill="#00fff5" text-anchor="middle" font-family="system-ui">V</text>"##,
    "</svg>"
);
