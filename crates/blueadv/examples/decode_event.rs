//! Example: Decode an LE Advertising Report event
//!
//! This example decodes a captured two-report HCI event with the blueadv library.

use blueadv::{dispatch, AdvertisingReportDecoder, DecoderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // H4 packet: event packet type, LE Meta event, two advertising reports
    let packet = hex::decode(concat!(
        "043e3c0202",
        // ADV_IND, random address, 34 bytes of data: flags, UUID128, name
        "0001aabbccddeeff22",
        "020106",
        "11079ecadc240ee5a9e093f3a3b50100406e",
        "0c094e6f726469632055415254",
        "c4",
        // SCAN_RSP, public address, 4 bytes of data: name
        "04001122334455660403094869",
        "b0",
    ))?;

    let decoder = AdvertisingReportDecoder::new(DecoderConfig::default().without_name_filter());

    let count = dispatch(&decoder, &packet, |outcome| {
        println!("Report with RSSI {} dBm", outcome.report.rssi);
        match &outcome.result {
            Ok(decoded) => {
                if let Some(name) = decoded.local_name_lossy() {
                    println!("  Name: {}", name);
                }
                if let Some(uuid) = &decoded.service_uuid128 {
                    println!("  UUID128: {}", uuid);
                }
            }
            Err(e) => println!("  Skipped: {}", e),
        }
    })?;

    println!("{} reports decoded", count);
    Ok(())
}
