use bitflags::bitflags;

bitflags! {
    /// Value of the Flags AD structure (type 0x01)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AdFlags: u8 {
        const LE_LIMITED_DISCOVERABLE = 0x01;
        const LE_GENERAL_DISCOVERABLE = 0x02;
        const BR_EDR_NOT_SUPPORTED = 0x04;
        const SIMULTANEOUS_LE_BR_EDR_CONTROLLER = 0x08;
        const SIMULTANEOUS_LE_BR_EDR_HOST = 0x10;
    }
}

impl AdFlags {
    /// Decodes a Flags field value; anything but a single byte is rejected
    pub fn from_field(value: &[u8]) -> Option<Self> {
        match value {
            [bits] => Some(AdFlags::from_bits_retain(*bits)),
            _ => None,
        }
    }

    pub fn is_discoverable(&self) -> bool {
        self.intersects(AdFlags::LE_LIMITED_DISCOVERABLE | AdFlags::LE_GENERAL_DISCOVERABLE)
    }
}
