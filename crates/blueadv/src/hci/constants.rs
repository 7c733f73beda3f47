//! HCI protocol constants
//!
//! This module contains constants used in the Bluetooth HCI protocol.

// HCI packet types (H4 indicator byte)
pub const HCI_COMMAND_PKT: u8 = 0x01;
pub const HCI_ACL_PKT: u8 = 0x02;
pub const HCI_EVENT_PKT: u8 = 0x04;

// HCI event header: event code + parameter total length
pub const HCI_EVENT_HDR_SIZE: usize = 2;

// Largest HCI event a controller can send (header + 255 parameter bytes)
pub const HCI_MAX_EVENT_SIZE: usize = 260;

// HCI Events
pub const EVT_CMD_COMPLETE: u8 = 0x0E;
pub const EVT_LE_META_EVENT: u8 = 0x3E;

// LE Meta Events
pub const EVT_LE_CONN_COMPLETE: u8 = 0x01;
pub const EVT_LE_ADVERTISING_REPORT: u8 = 0x02;

// Bytes of one advertising report record that precede its data:
// event type, address type, address, data length
pub const LE_ADV_REPORT_HDR_SIZE: usize = 9;
