//! Advertising data (AD structure) decoding
//!
//! This module walks the AD structures of an advertising payload and extracts
//! the fields of interest from LE advertising reports.

pub mod decoder;
pub mod flags;
pub mod scanner;


pub use decoder::{
    is_valid_ad_type, resolve, AdvertisingReportDecoder, DecodedAdvertisement, DecoderConfig,
};
pub use flags::AdFlags;
pub use scanner::{find_first, AdField, AdFieldScanner, AdvertisingPayload};
