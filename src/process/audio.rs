//! Audio conversion.
//!
//! Reads a PCM wave file and emits exactly one interleaved frame: one
//! sample per channel, little-endian, at the source's sample width. The
//! consuming engine expects this single-frame payload; do not widen it to
//! the full stream. Streams shorter than one frame (including empty ones)
//! produce a zero-padded frame.

use std::path::Path;

use hound::SampleFormat;

use crate::error::{Result, XpakError};

/// Decode the first audio frame of a wave file.
///
/// The payload is `bytes_per_sample * channels` bytes.
pub fn import_audio(path: &Path) -> Result<Vec<u8>> {
    let reader = hound::WavReader::open(path).map_err(|e| import_error(path, e))?;
    let spec = reader.spec();

    let bytes_per_sample = usize::from((spec.bits_per_sample + 7) / 8);
    let channels = usize::from(spec.channels);
    let frame_len = bytes_per_sample * channels;

    let mut frame = Vec::with_capacity(frame_len);
    match spec.sample_format {
        SampleFormat::Float => {
            let mut samples = reader.into_samples::<f32>();
            for _ in 0..channels {
                match samples.next() {
                    Some(sample) => {
                        let value = sample.map_err(|e| import_error(path, e))?;
                        frame.extend_from_slice(&value.to_le_bytes());
                    }
                    None => break,
                }
            }
        }
        SampleFormat::Int => {
            let mut samples = reader.into_samples::<i32>();
            for _ in 0..channels {
                match samples.next() {
                    Some(sample) => {
                        let value = sample.map_err(|e| import_error(path, e))?;
                        frame.extend_from_slice(&value.to_le_bytes()[..bytes_per_sample]);
                    }
                    None => break,
                }
            }
        }
    }

    // Short or empty streams still yield a full, zero-filled frame.
    frame.resize(frame_len, 0);
    Ok(frame)
}

fn import_error(path: &Path, e: impl std::fmt::Display) -> XpakError {
    XpakError::Import {
        path: path.to_path_buf(),
        message: format!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use tempfile::tempdir;

    fn int_spec(channels: u16, bits: u16) -> WavSpec {
        WavSpec {
            channels,
            sample_rate: 44100,
            bits_per_sample: bits,
            sample_format: SampleFormat::Int,
        }
    }

    #[test]
    fn test_import_first_frame_16_bit_stereo() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stereo.wav");

        let mut writer = WavWriter::create(&path, int_spec(2, 16)).unwrap();
        for sample in [1000i16, -2000, 3000, 4000] {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();

        let payload = import_audio(&path).unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(&1000i16.to_le_bytes());
        expected.extend_from_slice(&(-2000i16).to_le_bytes());
        assert_eq!(payload, expected);
    }

    #[test]
    fn test_import_first_frame_f32_mono() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mono.wav");

        let spec = WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        writer.write_sample(0.5f32).unwrap();
        writer.write_sample(-0.25f32).unwrap();
        writer.finalize().unwrap();

        let payload = import_audio(&path).unwrap();
        assert_eq!(payload, 0.5f32.to_le_bytes().to_vec());
    }

    #[test]
    fn test_import_empty_stream_zero_fills_frame() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("silent.wav");

        let writer = WavWriter::create(&path, int_spec(2, 16)).unwrap();
        writer.finalize().unwrap();

        let payload = import_audio(&path).unwrap();
        assert_eq!(payload, vec![0u8; 4]);
    }

    #[test]
    fn test_import_missing_file() {
        let err = import_audio(Path::new("/nonexistent/jump.wav")).unwrap_err();
        assert!(matches!(err, XpakError::Import { .. }));
        assert!(err.to_string().contains("jump.wav"));
    }

    #[test]
    fn test_import_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noise.wav");
        std::fs::write(&path, b"RIFFgarbage").unwrap();

        let err = import_audio(&path).unwrap_err();
        assert!(matches!(err, XpakError::Import { .. }));
    }
}
