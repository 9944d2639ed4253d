pub mod model;

pub use model::{DATA_URI_PREFIX, LOGO_SVG, SVG_MIME};
