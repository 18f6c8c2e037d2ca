//! JWT token codec

mod codec;
mod config;

pub use codec::TokenCodec;
pub use config::TokenCodecConfig;
