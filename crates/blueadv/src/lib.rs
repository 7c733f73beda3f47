//! blueadv - Bluetooth LE advertising data decoding
//!
//! This library decodes LE Advertising Report events as delivered by an HCI
//! controller: it splits an event into its reports, walks the AD structures
//! of each report with a bounds-checked scanner, and extracts the local name,
//! 128-bit service UUID and flags. Opening the HCI device and reading events
//! is left to the caller.

pub mod ad;
pub mod error;
pub mod gap;
pub mod hci;
pub mod scan;
pub mod uuid;

// Re-export common types for convenience
pub use ad::{
    AdField, AdFieldScanner, AdFlags, AdvertisingPayload, AdvertisingReportDecoder,
    DecodedAdvertisement, DecoderConfig,
};
pub use error::{DecodeError, HciError};
pub use gap::{AddressType, AdvEventType, BdAddr};
pub use hci::{AdvertisingReport, AdvertisingReports, HciEvent};
pub use scan::{dispatch, dispatch_event, ScanOutcome};
pub use uuid::Uuid;
