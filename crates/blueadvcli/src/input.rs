//! Reading hex-encoded HCI packets from text

use anyhow::{Context, Result};
use blueadv::hci::constants::{HCI_EVENT_PKT, HCI_MAX_EVENT_SIZE};

/// Decodes one input line into packet bytes.
///
/// Whitespace and `:` separators are ignored and `#` starts a comment.
/// Blank lines yield `None`. With `raw` set the line holds an event without
/// the packet type byte, which is added.
pub fn parse_line(line: &str, raw: bool) -> Result<Option<Vec<u8>>> {
    let content = line.split('#').next().unwrap_or_default();
    let digits: String = content
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    if digits.is_empty() {
        return Ok(None);
    }

    let bytes = hex::decode(&digits).with_context(|| format!("invalid hex packet {:?}", digits))?;

    let packet = if raw {
        let mut packet = Vec::with_capacity(bytes.len() + 1);
        packet.push(HCI_EVENT_PKT);
        packet.extend_from_slice(&bytes);
        packet
    } else {
        bytes
    };

    if packet.len() > HCI_MAX_EVENT_SIZE + 1 {
        log::warn!(
            "packet of {} bytes is larger than any HCI event",
            packet.len()
        );
    }

    Ok(Some(packet))
}
