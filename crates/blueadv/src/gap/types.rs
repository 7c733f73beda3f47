use crate::gap::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    Public,
    Random,
    PublicIdentity,
    RandomIdentity,
    Unknown(u8),
}

impl From<u8> for AddressType {
    fn from(value: u8) -> Self {
        match value {
            PUBLIC_DEVICE_ADDRESS => AddressType::Public,
            RANDOM_DEVICE_ADDRESS => AddressType::Random,
            PUBLIC_IDENTITY_ADDRESS => AddressType::PublicIdentity,
            RANDOM_IDENTITY_ADDRESS => AddressType::RandomIdentity,
            other => AddressType::Unknown(other),
        }
    }
}

impl From<AddressType> for u8 {
    fn from(value: AddressType) -> Self {
        match value {
            AddressType::Public => PUBLIC_DEVICE_ADDRESS,
            AddressType::Random => RANDOM_DEVICE_ADDRESS,
            AddressType::PublicIdentity => PUBLIC_IDENTITY_ADDRESS,
            AddressType::RandomIdentity => RANDOM_IDENTITY_ADDRESS,
            AddressType::Unknown(other) => other,
        }
    }
}

/// Event type of a legacy LE advertising report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvEventType {
    /// Connectable undirected advertising
    AdvInd,
    /// Connectable directed advertising
    AdvDirectInd,
    /// Scannable undirected advertising
    AdvScanInd,
    /// Non-connectable undirected advertising
    AdvNonconnInd,
    /// Scan response
    ScanRsp,
    Unknown(u8),
}

impl From<u8> for AdvEventType {
    fn from(value: u8) -> Self {
        match value {
            ADV_IND => AdvEventType::AdvInd,
            ADV_DIRECT_IND => AdvEventType::AdvDirectInd,
            ADV_SCAN_IND => AdvEventType::AdvScanInd,
            ADV_NONCONN_IND => AdvEventType::AdvNonconnInd,
            SCAN_RSP => AdvEventType::ScanRsp,
            other => AdvEventType::Unknown(other),
        }
    }
}

impl From<AdvEventType> for u8 {
    fn from(value: AdvEventType) -> Self {
        match value {
            AdvEventType::AdvInd => ADV_IND,
            AdvEventType::AdvDirectInd => ADV_DIRECT_IND,
            AdvEventType::AdvScanInd => ADV_SCAN_IND,
            AdvEventType::AdvNonconnInd => ADV_NONCONN_IND,
            AdvEventType::ScanRsp => SCAN_RSP,
            AdvEventType::Unknown(other) => other,
        }
    }
}

/// Bluetooth device address, stored in over-the-air (little-endian) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BdAddr {
    pub bytes: [u8; 6],
}

impl BdAddr {
    pub fn new(bytes: [u8; 6]) -> Self {
        Self { bytes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_type_conversion() {
        assert_eq!(AddressType::from(0x00), AddressType::Public);
        assert_eq!(AddressType::from(0x01), AddressType::Random);
        assert_eq!(AddressType::from(0x07), AddressType::Unknown(0x07));
        assert_eq!(u8::from(AddressType::RandomIdentity), 0x03);
        assert_eq!(u8::from(AddressType::Unknown(0x07)), 0x07);
    }

    #[test]
    fn test_adv_event_type_conversion() {
        assert_eq!(AdvEventType::from(0x00), AdvEventType::AdvInd);
        assert_eq!(AdvEventType::from(0x04), AdvEventType::ScanRsp);
        assert_eq!(AdvEventType::from(0x0D), AdvEventType::Unknown(0x0D));
    }
}
