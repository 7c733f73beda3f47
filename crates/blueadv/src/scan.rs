//! Advertising report dispatch
//!
//! This module turns one raw HCI LE Advertising Report event into one decode
//! outcome per report it carries.

use crate::ad::{AdvertisingReportDecoder, DecodedAdvertisement};
use crate::error::{DecodeError, HciError};
use crate::hci::{AdvertisingReport, AdvertisingReports, HciEvent};
use log::{error, trace, warn};

/// Decode outcome of a single advertising report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome<'a> {
    pub report: AdvertisingReport<'a>,
    pub result: Result<DecodedAdvertisement, DecodeError>,
}

/// Decode every report of an already framed HCI event.
///
/// Errors that concern the event as a whole are returned as `Err`. A report
/// that fails to decode is returned with its error and does not stop the
/// reports after it. If the event runs out of bytes part way through, the
/// reports read so far are returned.
pub fn dispatch_event<'a>(
    decoder: &AdvertisingReportDecoder,
    event: &'a HciEvent,
) -> Result<Vec<ScanOutcome<'a>>, HciError> {
    let reports = AdvertisingReports::from_event(event)?;
    trace!("advertising report event with {} reports", reports.num_reports());

    let mut outcomes = Vec::with_capacity(reports.num_reports() as usize);
    for report in reports {
        let report = match report {
            Ok(report) => report,
            Err(e) => {
                warn!("{}", e);
                break;
            }
        };

        let result = decoder.decode(&report);
        if let Err(e) = &result {
            if e.is_contract_violation() {
                error!("advertising report decoder misconfigured: {}", e);
            } else {
                trace!("report skipped: {}", e);
            }
        }

        outcomes.push(ScanOutcome { report, result });
    }

    Ok(outcomes)
}

/// Frame a raw packet (H4 packet type byte first) and hand each report's
/// outcome to `callback`.
///
/// # Returns
///
/// The number of reports passed to the callback
pub fn dispatch<F>(
    decoder: &AdvertisingReportDecoder,
    packet: &[u8],
    mut callback: F,
) -> Result<usize, HciError>
where
    F: FnMut(&ScanOutcome<'_>),
{
    let event = HciEvent::parse_packet(packet)?;
    let outcomes = dispatch_event(decoder, &event)?;
    outcomes.iter().for_each(&mut callback);
    Ok(outcomes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ad::DecoderConfig;
    use crate::gap::constants::*;
    use crate::hci::constants::*;

    fn record(address: u8, data: &[u8], rssi: i8) -> Vec<u8> {
        let mut record = vec![ADV_IND, RANDOM_DEVICE_ADDRESS];
        record.extend_from_slice(&[address; 6]);
        record.push(data.len() as u8);
        record.extend_from_slice(data);
        record.push(rssi as u8);
        record
    }

    fn packet(records: &[Vec<u8>]) -> Vec<u8> {
        let mut parameters = vec![EVT_LE_ADVERTISING_REPORT, records.len() as u8];
        records.iter().for_each(|r| parameters.extend_from_slice(r));

        let mut packet = vec![HCI_EVENT_PKT, EVT_LE_META_EVENT, parameters.len() as u8];
        packet.extend_from_slice(&parameters);
        packet
    }

    #[test]
    fn test_bad_report_does_not_stop_later_reports() {
        let packet = packet(&[
            record(0x01, &[0x03, 0x09, b'H', b'i'], -80),
            record(0x02, &[0x05, 0x09, b'A', b'B'], -70),
            record(0x03, &[0x08, 0x09, b'P', b'i', b'x', b'e', b'l', b' ', b'7'], -60),
        ]);

        let decoder = AdvertisingReportDecoder::default();
        let mut outcomes = Vec::new();
        let count = dispatch(&decoder, &packet, |outcome| {
            outcomes.push((outcome.report.rssi, outcome.result.clone()))
        })
        .unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            outcomes[0],
            (-80, Err(DecodeError::UninterestingAdvertisement { name_len: 2 }))
        );
        // Truncated name field reads as no name at all
        assert_eq!(outcomes[1], (-70, Ok(DecodedAdvertisement::default())));
        assert_eq!(outcomes[2].0, -60);
        let decoded = outcomes[2].1.as_ref().unwrap();
        assert_eq!(decoded.local_name_lossy().unwrap(), "Pixel 7");
    }

    #[test]
    fn test_dispatch_event_keeps_reports_before_split_failure() {
        let mut raw = packet(&[
            record(0x01, &[0x08, 0x09, b'P', b'i', b'x', b'e', b'l', b' ', b'7'], -60),
            record(0x02, &[0x02, 0x01, 0x06], -50),
        ]);
        // Cut the last record short and fix up the parameter length
        raw.truncate(raw.len() - 2);
        raw[2] = (raw.len() - 3) as u8;

        let event = HciEvent::parse_packet(&raw).unwrap();
        let decoder = AdvertisingReportDecoder::default();
        let outcomes = dispatch_event(&decoder, &event).unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].report.address.bytes, [0x01; 6]);
        assert!(outcomes[0].result.is_ok());
    }

    #[test]
    fn test_dispatch_rejects_other_events() {
        let decoder = AdvertisingReportDecoder::new(DecoderConfig::default().without_name_filter());

        let packet = [HCI_EVENT_PKT, EVT_CMD_COMPLETE, 4, 1, 0x03, 0x0C, 0x00];
        let result = dispatch(&decoder, &packet, |_| panic!("no reports expected"));
        assert!(matches!(result, Err(HciError::UnexpectedEvent { .. })));

        let result = dispatch(&decoder, &[HCI_ACL_PKT, 0x00], |_| {});
        assert_eq!(result, Err(HciError::UnexpectedPacketType(HCI_ACL_PKT)));
    }
}
