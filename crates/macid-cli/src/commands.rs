use std::io::Write;
use std::time::{Duration, UNIX_EPOCH};

use anyhow::Context;
use macid::{MacidGenerator, RequestId, as_hex_request_id};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{CliConfig, Command};

/// Fields of one id, as printed by `new --json` and `inspect`.
#[derive(Serialize, Debug)]
struct IdReport {
    #[serde(with = "as_hex_request_id")]
    id: RequestId,
    timestamp: u32,
    machine: String,
    sequence: u32,
}

impl From<RequestId> for IdReport {
    fn from(id: RequestId) -> Self {
        Self {
            id,
            timestamp: id.timestamp(),
            machine: id.machine().iter().map(|b| format!("{b:02x}")).collect(),
            sequence: id.sequence(),
        }
    }
}

#[derive(Serialize, Debug)]
struct FingerprintReport {
    fingerprint: String,
    origin: String,
}

/// Runs one command, writing results to `out`.
///
/// Returns `Ok(false)` when the command ran but its answer is negative (only
/// `check` does this), so the caller can exit non-zero without printing an
/// error.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> anyhow::Result<bool> {
    match &config.command {
        Command::New { count } => {
            let generator = new_generator()?;
            for _ in 0..*count {
                let id = generator.next_id();
                if config.json {
                    write_json(out, &IdReport::from(id))?;
                } else {
                    writeln!(out, "{id}")?;
                }
            }
            debug!(count, last_sequence = generator.sequence(), "minted ids");
        }
        Command::At { unix_secs } => {
            let id = RequestId::from_datetime(UNIX_EPOCH + Duration::from_secs(*unix_secs));
            if config.json {
                write_json(out, &IdReport::from(id))?;
            } else {
                writeln!(out, "{id}")?;
            }
        }
        Command::Inspect { ids } => {
            for s in ids {
                let id = RequestId::from_hex(s)
                    .with_context(|| format!("invalid request id {s:?}"))?;
                let report = IdReport::from(id);
                if config.json {
                    write_json(out, &report)?;
                } else {
                    writeln!(
                        out,
                        "{}\ttimestamp={}\tmachine={}\tsequence={}",
                        report.id, report.timestamp, report.machine, report.sequence
                    )?;
                }
            }
        }
        Command::Check { id } => {
            let valid = RequestId::is_valid_hex(id);
            debug!(%id, valid, "checked request id");
            return Ok(valid);
        }
        Command::Fingerprint => {
            let generator = new_generator()?;
            let fingerprint = generator.fingerprint();
            let report = FingerprintReport {
                fingerprint: fingerprint.to_string(),
                origin: fingerprint.origin().to_string(),
            };
            if config.json {
                write_json(out, &report)?;
            } else {
                writeln!(out, "{}\t{}", report.fingerprint, report.origin)?;
            }
        }
    }
    Ok(true)
}

fn new_generator() -> anyhow::Result<MacidGenerator> {
    let generator = MacidGenerator::new().context("cannot create id generator")?;
    info!(
        fingerprint = %generator.fingerprint(),
        origin = %generator.fingerprint().origin(),
        "id generator ready"
    );
    Ok(generator)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to encode JSON")?;
    writeln!(out)?;
    Ok(())
}
