// Address types
pub const PUBLIC_DEVICE_ADDRESS: u8 = 0x00;
pub const RANDOM_DEVICE_ADDRESS: u8 = 0x01;
pub const PUBLIC_IDENTITY_ADDRESS: u8 = 0x02;
pub const RANDOM_IDENTITY_ADDRESS: u8 = 0x03;

// Legacy advertising event types (LE Advertising Report)
pub const ADV_IND: u8 = 0x00;
pub const ADV_DIRECT_IND: u8 = 0x01;
pub const ADV_SCAN_IND: u8 = 0x02;
pub const ADV_NONCONN_IND: u8 = 0x03;
pub const SCAN_RSP: u8 = 0x04;

// Advertising Data Types
pub const ADV_TYPE_FLAGS: u8 = 0x01;
pub const ADV_TYPE_16BIT_SERVICE_UUID_PARTIAL: u8 = 0x02;
pub const ADV_TYPE_16BIT_SERVICE_UUID_COMPLETE: u8 = 0x03;
pub const ADV_TYPE_32BIT_SERVICE_UUID_PARTIAL: u8 = 0x04;
pub const ADV_TYPE_32BIT_SERVICE_UUID_COMPLETE: u8 = 0x05;
pub const ADV_TYPE_128BIT_SERVICE_UUID_PARTIAL: u8 = 0x06;
pub const ADV_TYPE_128BIT_SERVICE_UUID_COMPLETE: u8 = 0x07;
pub const ADV_TYPE_SHORT_LOCAL_NAME: u8 = 0x08;
pub const ADV_TYPE_COMPLETE_LOCAL_NAME: u8 = 0x09;
pub const ADV_TYPE_TX_POWER_LEVEL: u8 = 0x0A;
pub const ADV_TYPE_CLASS_OF_DEVICE: u8 = 0x0D;
pub const ADV_TYPE_SIMPLE_PAIRING_HASH: u8 = 0x0E;
pub const ADV_TYPE_SIMPLE_PAIRING_RANDOMIZER: u8 = 0x0F;
pub const ADV_TYPE_DEVICE_ID: u8 = 0x10;
pub const ADV_TYPE_APPEARANCE: u8 = 0x19;
pub const ADV_TYPE_128BIT_SERVICE_DATA: u8 = 0x21;
pub const ADV_TYPE_MANUFACTURER_SPECIFIC: u8 = 0xFF;

// Range of AD types accepted by lookups, plus the manufacturer-specific sentinel
pub const ADV_TYPE_FIRST: u8 = ADV_TYPE_FLAGS;
pub const ADV_TYPE_LAST: u8 = ADV_TYPE_128BIT_SERVICE_DATA;

/// Maximum number of advertising data bytes a scan will look at
pub const MAX_ADV_DATA_LEN: usize = 62;
