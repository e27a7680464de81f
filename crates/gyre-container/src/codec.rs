//! Text encode/decode for the container format.
//!
//! The header is a fixed sequence of `KEY:value` lines. Fields must appear
//! in the order they are written; there is no self-describing schema and
//! no optional field.

use std::io::{Read, Write};

use gyre_core::{Strength, TierLengths};
use tracing::debug;

use crate::error::ContainerError;
use crate::hash::ciphertext_checksum;
use crate::types::Envelope;
use crate::{FORMAT_VERSION, HEADER_END, MAGIC};

// ── Encode ──────────────────────────────────────────────────────

/// Write `envelope` as a complete container, including the trailing newline.
pub fn encode_envelope(w: &mut dyn Write, envelope: &Envelope) -> Result<(), ContainerError> {
    writeln!(w, "{MAGIC}")?;
    writeln!(w, "VERSION:{FORMAT_VERSION}")?;
    writeln!(w, "STRENGTH:{}", envelope.strength)?;
    writeln!(w, "LENGTH:{}", envelope.original_length)?;
    writeln!(w, "TIERS:{}", envelope.tiers)?;
    writeln!(w, "CHECKSUM:{:016x}", envelope.checksum())?;
    writeln!(w, "{HEADER_END}")?;
    writeln!(w, "{}", envelope.ciphertext)?;
    debug!(
        len = envelope.original_length,
        strength = %envelope.strength,
        "wrote container"
    );
    Ok(())
}

/// Render `envelope` to an owned string.
pub fn encode_to_string(envelope: &Envelope) -> Result<String, ContainerError> {
    let mut buf = Vec::new();
    encode_envelope(&mut buf, envelope)?;
    String::from_utf8(buf).map_err(|e| ContainerError::MalformedHeader {
        detail: format!("invalid UTF-8: {e}"),
    })
}

// ── Decode ──────────────────────────────────────────────────────

/// Read and validate a container from `r`.
///
/// Reads the stream to the end; a container is small enough to hold in
/// memory whole.
pub fn decode_envelope(r: &mut dyn Read) -> Result<Envelope, ContainerError> {
    let mut text = String::new();
    r.read_to_string(&mut text).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => ContainerError::MalformedHeader {
            detail: "container is not valid UTF-8".to_string(),
        },
        _ => ContainerError::Io(e),
    })?;
    parse_envelope(&text)
}

/// Parse and validate a container held in memory.
///
/// Checks, in order: the marker line, the version, every header field,
/// the separator, that `LENGTH` matches the ciphertext, that `TIERS` is
/// all zero or sums to `LENGTH`, and finally the checksum.
pub fn parse_envelope(text: &str) -> Result<Envelope, ContainerError> {
    let mut lines = text.lines();

    if lines.next().map(str::trim_end) != Some(MAGIC) {
        return Err(ContainerError::InvalidMagic);
    }

    let version = header_field(&mut lines, "VERSION")?;
    let version: u8 = version.parse().map_err(|_| malformed("VERSION", version))?;
    if version != FORMAT_VERSION {
        return Err(ContainerError::UnsupportedVersion { found: version });
    }

    let strength: Strength = header_field(&mut lines, "STRENGTH")?.parse()?;

    let length = header_field(&mut lines, "LENGTH")?;
    let original_length: usize = length.parse().map_err(|_| malformed("LENGTH", length))?;

    let tiers = parse_tiers(header_field(&mut lines, "TIERS")?)?;

    let checksum = header_field(&mut lines, "CHECKSUM")?;
    let recorded = u64::from_str_radix(checksum, 16)
        .ok()
        .filter(|_| checksum.len() == 16)
        .ok_or_else(|| malformed("CHECKSUM", checksum))?;

    match lines.next().map(str::trim_end) {
        Some(HEADER_END) => {}
        other => {
            return Err(ContainerError::MalformedHeader {
                detail: format!(
                    "expected '{HEADER_END}' separator, found {}",
                    describe(other)
                ),
            })
        }
    }

    let ciphertext = lines.next().map(str::trim_end).unwrap_or_default();
    if let Some(extra) = lines.find(|l| !l.trim().is_empty()) {
        return Err(ContainerError::MalformedHeader {
            detail: format!("unexpected data after ciphertext: '{extra}'"),
        });
    }

    let char_len = ciphertext.chars().count();
    if char_len != original_length {
        return Err(ContainerError::MalformedHeader {
            detail: format!(
                "LENGTH is {original_length} but the ciphertext has {char_len} characters"
            ),
        });
    }
    if !tiers.is_empty() && tiers.total() != original_length {
        return Err(ContainerError::MalformedHeader {
            detail: format!(
                "TIERS {tiers} sum to {} but LENGTH is {original_length}",
                tiers.total()
            ),
        });
    }

    let computed = ciphertext_checksum(ciphertext);
    if computed != recorded {
        return Err(ContainerError::ChecksumMismatch { recorded, computed });
    }

    debug!(len = original_length, %strength, "read container");
    Ok(Envelope {
        strength,
        original_length,
        tiers,
        ciphertext: ciphertext.to_string(),
    })
}

// ── Helpers ─────────────────────────────────────────────────────

/// Take the next line and strip its `KEY:` prefix.
fn header_field<'a, I>(lines: &mut I, key: &str) -> Result<&'a str, ContainerError>
where
    I: Iterator<Item = &'a str>,
{
    let line = lines.next().map(str::trim_end);
    line.and_then(|l| l.strip_prefix(key))
        .and_then(|rest| rest.strip_prefix(':'))
        .map(str::trim)
        .ok_or_else(|| ContainerError::MalformedHeader {
            detail: format!("expected {key} line, found {}", describe(line)),
        })
}

fn parse_tiers(value: &str) -> Result<TierLengths, ContainerError> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [core, ring, outer] = parts.as_slice() else {
        return Err(malformed("TIERS", value));
    };
    let num = |s: &str| s.parse::<usize>().map_err(|_| malformed("TIERS", value));
    Ok(TierLengths::new(num(*core)?, num(*ring)?, num(*outer)?))
}

fn malformed(key: &str, value: &str) -> ContainerError {
    ContainerError::MalformedHeader {
        detail: format!("invalid {key} value '{value}'"),
    }
}

fn describe(line: Option<&str>) -> String {
    match line {
        Some(l) => format!("'{l}'"),
        None => "end of input".to_string(),
    }
}
