//! HCI event framing and LE advertising report splitting
//!
//! Records are read with explicit offset tracking over the event parameters;
//! no structure is ever reinterpreted from raw memory.

use crate::ad::AdvertisingPayload;
use crate::error::HciError;
use crate::gap::{AddressType, AdvEventType, BdAddr};
use crate::hci::constants::*;
use byteorder::ReadBytesExt;
use std::io::{self, Cursor, Read};

/// HCI Event packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HciEvent {
    pub event_code: u8,
    pub parameter_total_length: u8,
    pub parameters: Vec<u8>,
}

impl HciEvent {
    /// Parse an HCI event from raw bytes starting at the event code
    pub fn parse(data: &[u8]) -> Result<Self, HciError> {
        if data.len() < HCI_EVENT_HDR_SIZE {
            return Err(HciError::InvalidPacketFormat);
        }

        let event_code = data[0];
        let parameter_total_length = data[1];
        let end = HCI_EVENT_HDR_SIZE + parameter_total_length as usize;

        let parameters = data
            .get(HCI_EVENT_HDR_SIZE..end)
            .ok_or(HciError::InvalidPacketFormat)?
            .to_vec();

        Ok(HciEvent {
            event_code,
            parameter_total_length,
            parameters,
        })
    }

    /// Parse an HCI event as read from an HCI socket, packet type byte first
    pub fn parse_packet(packet: &[u8]) -> Result<Self, HciError> {
        match packet.split_first() {
            Some((&HCI_EVENT_PKT, rest)) => Self::parse(rest),
            Some((&other, _)) => Err(HciError::UnexpectedPacketType(other)),
            None => Err(HciError::InvalidPacketFormat),
        }
    }

    /// Subevent code of an LE Meta event
    pub fn subevent(&self) -> Option<u8> {
        if self.event_code == EVT_LE_META_EVENT {
            self.parameters.first().copied()
        } else {
            None
        }
    }

    pub fn is_advertising_report(&self) -> bool {
        self.subevent() == Some(EVT_LE_ADVERTISING_REPORT)
    }
}

/// One record of an LE Advertising Report event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvertisingReport<'a> {
    pub event_type: AdvEventType,
    pub address_type: AddressType,
    pub address: BdAddr,
    pub rssi: i8,
    /// Advertising data, borrowed from the event
    pub data: &'a [u8],
}

impl<'a> AdvertisingReport<'a> {
    pub fn payload(&self) -> AdvertisingPayload<'a> {
        AdvertisingPayload::new(self.data)
    }
}

/// Iterator over the records of an LE Advertising Report event.
///
/// Each record is `event_type | address_type | address(6) | data_length |
/// data(data_length) | rssi`. A record that does not fit in the event ends
/// the iteration with [`HciError::ReportTruncated`].
#[derive(Debug, Clone)]
pub struct AdvertisingReports<'a> {
    cursor: Cursor<&'a [u8]>,
    num_reports: u8,
    index: usize,
    failed: bool,
}

impl<'a> AdvertisingReports<'a> {
    pub fn from_event(event: &'a HciEvent) -> Result<Self, HciError> {
        if !event.is_advertising_report() {
            return Err(HciError::UnexpectedEvent {
                event_code: event.event_code,
                subevent: event.subevent(),
            });
        }

        let (&num_reports, records) = event.parameters[1..]
            .split_first()
            .ok_or(HciError::InvalidPacketFormat)?;

        Ok(Self {
            cursor: Cursor::new(records),
            num_reports,
            index: 0,
            failed: false,
        })
    }

    /// Number of records announced by the event
    pub fn num_reports(&self) -> u8 {
        self.num_reports
    }

    fn read_report(&mut self) -> io::Result<AdvertisingReport<'a>> {
        let event_type = AdvEventType::from(self.cursor.read_u8()?);
        let address_type = AddressType::from(self.cursor.read_u8()?);

        let mut address = [0u8; 6];
        self.cursor.read_exact(&mut address)?;

        let data_length = self.cursor.read_u8()? as usize;
        let records: &'a [u8] = *self.cursor.get_ref();
        let start = self.cursor.position() as usize;
        let data = records
            .get(start..start + data_length)
            .ok_or(io::ErrorKind::UnexpectedEof)?;
        self.cursor.set_position((start + data_length) as u64);

        // RSSI trails the data
        let rssi = self.cursor.read_i8()?;

        Ok(AdvertisingReport {
            event_type,
            address_type,
            address: BdAddr::new(address),
            rssi,
            data,
        })
    }
}

impl<'a> Iterator for AdvertisingReports<'a> {
    type Item = Result<AdvertisingReport<'a>, HciError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.index >= self.num_reports as usize {
            return None;
        }

        let index = self.index;
        self.index += 1;

        match self.read_report() {
            Ok(report) => Some(Ok(report)),
            Err(_) => {
                self.failed = true;
                Some(Err(HciError::ReportTruncated { index }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        (0, Some(self.num_reports as usize - self.index))
    }
}

impl std::iter::FusedIterator for AdvertisingReports<'_> {}
