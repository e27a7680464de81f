//! Reading and writing containers on disk.
//!
//! Each call opens, uses, and closes its own handle; nothing is held
//! between calls.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use gyre_core::Strength;
use tracing::debug;

use crate::codec::{decode_envelope, encode_envelope};
use crate::error::ContainerError;
use crate::types::Envelope;

/// Write `envelope` to `path`, creating or truncating the file.
pub fn write_file(path: impl AsRef<Path>, envelope: &Envelope) -> Result<(), ContainerError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    encode_envelope(&mut writer, envelope)?;
    writer.flush()?;
    debug!(path = %path.display(), "saved container");
    Ok(())
}

/// Read and validate the container stored at `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Envelope, ContainerError> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let envelope = decode_envelope(&mut reader)?;
    debug!(path = %path.display(), "loaded container");
    Ok(envelope)
}

/// Encode the plaintext file at `input` and save the container to `output`.
///
/// The file content is normalized like any other message, so line breaks
/// and spacing are dropped. Returns the envelope that was written.
pub fn seal_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    strength: Strength,
) -> Result<Envelope, ContainerError> {
    let input = input.as_ref();
    let mut plaintext = String::new();
    BufReader::new(File::open(input)?).read_to_string(&mut plaintext)?;
    let envelope = Envelope::seal(&plaintext, strength)?;
    write_file(output, &envelope)?;
    debug!(
        input = %input.display(),
        len = envelope.original_length,
        %strength,
        "sealed plaintext file"
    );
    Ok(envelope)
}

/// Decode the container at `input` and write the recovered message to
/// `output`. Returns the recovered message.
pub fn open_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<String, ContainerError> {
    let envelope = read_file(input)?;
    let message = envelope.open()?;
    let output = output.as_ref();
    let mut writer = BufWriter::new(File::create(output)?);
    writer.write_all(message.as_bytes())?;
    writer.flush()?;
    debug!(output = %output.display(), len = envelope.original_length, "opened container file");
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gyre-file-{}-{name}.txt", std::process::id()))
    }

    #[test]
    fn write_then_read() {
        let path = scratch("roundtrip");
        let envelope = Envelope::seal("event horizon", Strength::Extreme).unwrap();
        write_file(&path, &envelope).unwrap();
        let back = read_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(back, envelope);
        assert_eq!(back.open().unwrap(), "EVENTHORIZON");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_file(scratch("does-not-exist")).unwrap_err();
        assert!(matches!(err, ContainerError::Io(_)));
    }

    #[test]
    fn corrupted_file_is_rejected() {
        let path = scratch("corrupt");
        let envelope = Envelope::seal("event horizon", Strength::Weak).unwrap();
        write_file(&path, &envelope).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let corrupted = text.replace(&envelope.ciphertext, &envelope.ciphertext.to_lowercase());
        std::fs::write(&path, corrupted).unwrap();
        let result = read_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ContainerError::ChecksumMismatch { .. })));
    }

    #[test]
    fn seal_then_open_plaintext_file() {
        let plain = scratch("plain-in");
        let sealed = scratch("sealed");
        let recovered = scratch("plain-out");
        std::fs::write(&plain, "Event horizon\nat dusk").unwrap();

        let envelope = seal_file(&plain, &sealed, Strength::Medium).unwrap();
        let message = open_file(&sealed, &recovered).unwrap();
        let written = std::fs::read_to_string(&recovered).unwrap();
        for path in [&plain, &sealed, &recovered] {
            std::fs::remove_file(path).unwrap();
        }

        assert_eq!(envelope.strength, Strength::Medium);
        assert_eq!(message, "EVENTHORIZONATDUSK");
        assert_eq!(written, message);
    }
}
