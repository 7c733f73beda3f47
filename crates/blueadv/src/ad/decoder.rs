//! Extraction of the fields an observer cares about from one advertising report

use super::flags::AdFlags;
use super::scanner::{find_first, AdField};
use crate::error::DecodeError;
use crate::gap::constants::*;
use crate::hci::AdvertisingReport;
use crate::uuid::Uuid;
use log::{debug, error};
use std::borrow::Cow;

/// Size of the buffer a decoded local name must fit in, terminator included
pub const DEFAULT_NAME_CAPACITY: usize = 256;

/// Names shorter than this are rejected by the default filter
pub const DEFAULT_MIN_NAME_LEN: usize = 4;

/// Filtering policy applied by [`AdvertisingReportDecoder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Minimum local name length in bytes; `None` accepts every report
    pub min_name_len: Option<usize>,
    /// Required prefix of the local name
    pub name_prefix: Option<Vec<u8>>,
    /// Output buffer size for the local name, one byte reserved for a terminator
    pub name_capacity: usize,
    /// Rejects reports that carry no complete local name
    pub require_name: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            min_name_len: Some(DEFAULT_MIN_NAME_LEN),
            name_prefix: None,
            name_capacity: DEFAULT_NAME_CAPACITY,
            require_name: false,
        }
    }
}

impl DecoderConfig {
    pub fn with_min_name_len(mut self, min_name_len: usize) -> Self {
        self.min_name_len = Some(min_name_len);
        self
    }

    /// Accepts reports regardless of local name length
    pub fn without_name_filter(mut self) -> Self {
        self.min_name_len = None;
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<Vec<u8>>) -> Self {
        self.name_prefix = Some(prefix.into());
        self
    }

    pub fn with_name_capacity(mut self, capacity: usize) -> Self {
        self.name_capacity = capacity;
        self
    }

    /// Treats a report without a complete local name as uninteresting
    pub fn with_required_name(mut self) -> Self {
        self.require_name = true;
        self
    }
}

/// Fields decoded from one advertising report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedAdvertisement {
    /// Complete local name, raw bytes as advertised
    pub local_name: Option<Vec<u8>>,
    /// Complete list of 128-bit service UUIDs, when it holds exactly one
    pub service_uuid128: Option<Uuid>,
    pub flags: Option<AdFlags>,
}

impl DecodedAdvertisement {
    pub fn local_name_lossy(&self) -> Option<Cow<'_, str>> {
        self.local_name
            .as_deref()
            .map(String::from_utf8_lossy)
    }
}

/// Returns true for type codes a lookup may ask for
pub fn is_valid_ad_type(ad_type: u8) -> bool {
    (ADV_TYPE_FIRST..=ADV_TYPE_LAST).contains(&ad_type) || ad_type == ADV_TYPE_MANUFACTURER_SPECIFIC
}

/// Looks up the first AD structure of `ad_type` after validating the type code.
///
/// An undefined type code is a bug in the caller and returns
/// [`DecodeError::InvalidFieldType`] without scanning.
pub fn resolve(data: &[u8], ad_type: u8) -> Result<Option<AdField<'_>>, DecodeError> {
    if !is_valid_ad_type(ad_type) {
        error!("AD type {:#04x} is not defined, lookup refused", ad_type);
        return Err(DecodeError::InvalidFieldType(ad_type));
    }
    Ok(find_first(data, ad_type))
}

/// Decodes advertising reports according to a [`DecoderConfig`]
#[derive(Debug, Clone, Default)]
pub struct AdvertisingReportDecoder {
    config: DecoderConfig,
}

impl AdvertisingReportDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn decode(&self, report: &AdvertisingReport<'_>) -> Result<DecodedAdvertisement, DecodeError> {
        let decoded = self.decode_payload(report.data)?;
        debug!(
            "decoded {:?} advertisement: name={:?} uuid={:?}",
            report.event_type,
            decoded.local_name_lossy(),
            decoded.service_uuid128
        );
        Ok(decoded)
    }

    /// Decodes a bare advertising payload
    pub fn decode_payload(&self, data: &[u8]) -> Result<DecodedAdvertisement, DecodeError> {
        let name = resolve(data, ADV_TYPE_COMPLETE_LOCAL_NAME)?.map(|field| field.value);
        match name {
            Some(name) => self.check_name(name)?,
            None if self.config.require_name => {
                return Err(DecodeError::UninterestingAdvertisement { name_len: 0 });
            }
            None => {}
        }

        let service_uuid128 = resolve(data, ADV_TYPE_128BIT_SERVICE_UUID_COMPLETE)?.and_then(|field| {
            let uuid = Uuid::try_from_slice_le(field.value);
            if uuid.is_none() {
                debug!(
                    "ignoring 128-bit service UUID field of {} bytes",
                    field.value.len()
                );
            }
            uuid
        });

        let flags = resolve(data, ADV_TYPE_FLAGS)?.and_then(|field| AdFlags::from_field(field.value));

        Ok(DecodedAdvertisement {
            local_name: name.map(<[u8]>::to_vec),
            service_uuid128,
            flags,
        })
    }

    /// Applies the capacity check and then the name filters to a present name
    fn check_name(&self, name: &[u8]) -> Result<(), DecodeError> {
        let name_len = name.len();
        if name_len + 1 > self.config.name_capacity {
            return Err(DecodeError::FieldTooLong {
                len: name_len,
                capacity: self.config.name_capacity,
            });
        }

        if let Some(min) = self.config.min_name_len {
            if name_len < min {
                return Err(DecodeError::UninterestingAdvertisement { name_len });
            }
        }

        if let Some(prefix) = &self.config.name_prefix {
            if !name.starts_with(prefix) {
                return Err(DecodeError::UninterestingAdvertisement { name_len });
            }
        }

        Ok(())
    }
}
