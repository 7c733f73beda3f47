//! Human-readable output for decoded reports

use blueadv::{AdvertisingPayload, DecodeError, ScanOutcome};
use std::io::{self, Write};

/// Writes `data` as offset-prefixed rows of 16 hex bytes
pub fn hexdump<W: Write>(out: &mut W, data: &[u8]) -> io::Result<()> {
    for (row, chunk) in data.chunks(16).enumerate() {
        let bytes: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        writeln!(out, "  {:04x}  {}", row * 16, bytes.join(" "))?;
    }
    Ok(())
}

/// Writes every AD structure of a payload, then the reason the walk stopped early, if any
pub fn dump_fields<W: Write>(out: &mut W, payload: AdvertisingPayload<'_>) -> io::Result<()> {
    for item in payload.fields() {
        match item {
            Ok(field) => {
                writeln!(
                    out,
                    "  [{:02}] type 0x{:02x}, {} bytes",
                    field.offset,
                    field.ad_type,
                    field.value.len()
                )?;
                hexdump(out, field.value)?;
            }
            Err(e) => writeln!(out, "  {}", e)?,
        }
    }
    Ok(())
}

/// Writes one line for a report; filtered-out reports are only written with `dump`
pub fn write_outcome<W: Write>(out: &mut W, outcome: &ScanOutcome<'_>, dump: bool) -> io::Result<()> {
    let report = &outcome.report;

    match &outcome.result {
        Ok(decoded) => {
            write!(
                out,
                "{} {:?} rssi={}",
                hex::encode(report.address.bytes),
                report.event_type,
                report.rssi
            )?;
            if let Some(name) = decoded.local_name_lossy() {
                write!(out, " name={:?}", name)?;
            }
            if let Some(uuid) = &decoded.service_uuid128 {
                write!(out, " uuid={}", uuid)?;
            }
            if let Some(flags) = decoded.flags {
                write!(out, " flags=0x{:02x}", flags.bits())?;
            }
            writeln!(out)?;
        }
        Err(DecodeError::UninterestingAdvertisement { .. }) if !dump => return Ok(()),
        Err(e) => {
            writeln!(
                out,
                "{} {:?} rssi={} skipped: {}",
                hex::encode(report.address.bytes),
                report.event_type,
                report.rssi,
                e
            )?;
        }
    }

    if dump {
        dump_fields(out, report.payload())?;
    }
    Ok(())
}
