pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use core::encoder::{decode_payload, emit, encode_data_uri, logo_data_uri};
pub use domain::model::{DATA_URI_PREFIX, LOGO_SVG};
pub use utils::error::{LogoError, Result};
