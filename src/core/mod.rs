pub mod encoder;

pub use encoder::{decode_payload, emit, encode_data_uri, logo_data_uri};
