//! Bluetooth HCI (Host Controller Interface) event handling
//!
//! This module frames HCI events and splits LE Advertising Report events
//! into individual reports. The HCI transport itself lives elsewhere.

pub mod constants;
pub mod packet;


pub use packet::{AdvertisingReport, AdvertisingReports, HciEvent};
