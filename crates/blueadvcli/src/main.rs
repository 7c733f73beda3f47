//! blueadvcli - decode LE advertising reports from captured HCI events
//!
//! Reads one hex-encoded HCI event packet per line (as captured from an HCI
//! socket, packet type byte first) and prints the decoded advertisements.

mod dump;
mod input;

use anyhow::{Context, Result};
use blueadv::ad::decoder::DEFAULT_MIN_NAME_LEN;
use blueadv::{dispatch, AdvertisingReportDecoder, DecoderConfig, HciError, Uuid};
use clap::{ArgAction, Parser};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blueadvcli", version, about = "Decode BLE advertising reports from HCI event dumps")]
struct Args {
    /// File with one hex-encoded HCI packet per line (stdin if omitted)
    input: Option<PathBuf>,

    /// Lines hold bare events without the leading packet type byte
    #[arg(long)]
    raw: bool,

    /// Print every AD structure of each report, including filtered ones
    #[arg(long)]
    dump: bool,

    /// Reject reports whose complete local name is shorter than this
    #[arg(long, default_value_t = DEFAULT_MIN_NAME_LEN)]
    min_name_len: usize,

    /// Accept reports regardless of local name length
    #[arg(long, conflicts_with = "min_name_len")]
    no_name_filter: bool,

    /// Reject reports that carry no complete local name
    #[arg(long)]
    require_name: bool,

    /// Only accept local names starting with this prefix
    #[arg(long)]
    name_prefix: Option<String>,

    /// Only print reports advertising this 128-bit service UUID
    #[arg(long)]
    uuid: Option<Uuid>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn decoder_config(&self) -> DecoderConfig {
        let mut config = if self.no_name_filter {
            DecoderConfig::default().without_name_filter()
        } else {
            DecoderConfig::default().with_min_name_len(self.min_name_len)
        };
        if let Some(prefix) = &self.name_prefix {
            config = config.with_name_prefix(prefix.as_bytes());
        }
        if self.require_name {
            config = config.with_required_name();
        }
        config
    }
}

#[derive(Debug, Default)]
struct Stats {
    packets: usize,
    reports: usize,
    decoded: usize,
    skipped_events: usize,
}

fn run<R: BufRead, W: Write>(args: &Args, reader: R, out: &mut W) -> Result<Stats> {
    let decoder = AdvertisingReportDecoder::new(args.decoder_config());
    let mut stats = Stats::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        let packet = match input::parse_line(&line, args.raw) {
            Ok(Some(packet)) => packet,
            Ok(None) => continue,
            Err(e) => {
                warn!("line {}: {:#}", number + 1, e);
                continue;
            }
        };
        stats.packets += 1;

        let mut write_result = Ok(());
        let dispatched = dispatch(&decoder, &packet, |outcome| {
            if let Ok(decoded) = &outcome.result {
                if args.uuid.is_some() && decoded.service_uuid128 != args.uuid {
                    return;
                }
                stats.decoded += 1;
            }
            if write_result.is_ok() {
                write_result = dump::write_outcome(&mut *out, outcome, args.dump);
            }
        });
        write_result.context("failed to write output")?;

        match dispatched {
            Ok(count) => stats.reports += count,
            Err(e @ HciError::UnexpectedEvent { .. }) => {
                debug!("line {}: {}", number + 1, e);
                stats.skipped_events += 1;
            }
            Err(e) => {
                warn!("line {}: {}", number + 1, e);
                stats.skipped_events += 1;
            }
        }
    }

    Ok(stats)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = run(&args, reader, &mut out)?;

    info!(
        "{} packets, {} reports, {} decoded, {} events skipped",
        stats.packets, stats.reports, stats.decoded, stats.skipped_events
    );
    Ok(())
}
