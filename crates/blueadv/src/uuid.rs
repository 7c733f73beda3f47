use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 128-bit Bluetooth UUID as carried in advertising data.
///
/// AD structures transmit UUIDs least-significant byte first, so the value is
/// stored exactly as received. `Display` prints the conventional big-endian
/// hyphenated form.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Uuid {
    bytes: [u8; 16],
}

/// The Bluetooth base UUID "00000000-0000-1000-8000-00805F9B34FB" (little-endian).
const BASE_UUID_BYTES: [u8; 16] = [
    0xFB, 0x34, 0x9B, 0x5F, 0x80, 0x00, 0x00, 0x80, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Offset within the base UUID where the 16/32-bit value is inserted.
const BASE_OFFSET: usize = 12;

impl Uuid {
    /// Creates a UUID from 16 bytes in little-endian (over-the-air) order.
    pub const fn from_bytes_le(bytes: [u8; 16]) -> Self {
        Uuid { bytes }
    }

    /// Creates a UUID from 16 bytes in big-endian (textual) order.
    pub fn from_bytes_be(mut bytes: [u8; 16]) -> Self {
        bytes.reverse();
        Uuid { bytes }
    }

    /// Creates a 128-bit UUID from a 16-bit SIG-assigned value.
    pub const fn from_u16(uuid16: u16) -> Self {
        let mut bytes = BASE_UUID_BYTES;
        bytes[BASE_OFFSET] = uuid16 as u8;
        bytes[BASE_OFFSET + 1] = (uuid16 >> 8) as u8;
        Uuid { bytes }
    }

    /// Reads a UUID from an AD field value.
    ///
    /// Only an exact 16-byte slice is accepted; anything else returns `None`.
    pub fn try_from_slice_le(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 16] = slice.try_into().ok()?;
        Some(Uuid::from_bytes_le(bytes))
    }

    /// Returns the underlying 16 bytes in little-endian order.
    pub const fn as_bytes_le(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Returns the underlying 16 bytes in big-endian order.
    pub fn as_bytes_be(&self) -> [u8; 16] {
        let mut bytes = self.bytes;
        bytes.reverse();
        bytes
    }

    /// Returns the 16-bit alias if this is a SIG-assigned UUID built on the base UUID.
    pub fn as_u16(&self) -> Option<u16> {
        let sig_assigned = self.bytes[0..BASE_OFFSET] == BASE_UUID_BYTES[0..BASE_OFFSET];
        if sig_assigned && self.bytes[BASE_OFFSET + 2] == 0 && self.bytes[BASE_OFFSET + 3] == 0 {
            Some(u16::from_le_bytes([
                self.bytes[BASE_OFFSET],
                self.bytes[BASE_OFFSET + 1],
            ]))
        } else {
            None
        }
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.as_bytes_be();
        write!(
            f,
            "{}-{}-{}-{}-{}",
            hex::encode(&b[0..4]),
            hex::encode(&b[4..6]),
            hex::encode(&b[6..8]),
            hex::encode(&b[8..10]),
            hex::encode(&b[10..16])
        )
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_u16() {
            Some(short) => write!(f, "Uuid(0x{:04X})", short),
            None => write!(f, "Uuid({})", self),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UuidParseError {
    #[error("UUID must have 4 or 32 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex in UUID: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl FromStr for Uuid {
    type Err = UuidParseError;

    /// Parses "180a", "0000180a-0000-1000-8000-00805f9b34fb" or the same without hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.chars().filter(|c| *c != '-').collect();

        match cleaned.len() {
            4 => {
                let mut short = [0u8; 2];
                hex::decode_to_slice(&cleaned, &mut short)?;
                Ok(Uuid::from_u16(u16::from_be_bytes(short)))
            }
            32 => {
                let mut bytes_be = [0u8; 16];
                hex::decode_to_slice(&cleaned, &mut bytes_be)?;
                Ok(Uuid::from_bytes_be(bytes_be))
            }
            other => Err(UuidParseError::InvalidLength(other)),
        }
    }
}
