use std::fs::File;
use std::io::{self, BufWriter, Cursor, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{Error, Result};

const HEADER_LEN: usize = 44;
const PCM_FORMAT: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BYTES_PER_SAMPLE: u16 = BITS_PER_SAMPLE / 8;
const FMT_CHUNK_LEN: u32 = 16;

/// Channel layout and rate of a 16-bit PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub channels: u16,
    pub sample_rate: u32,
}

impl PcmFormat {
    pub fn mono(sample_rate: u32) -> Self {
        PcmFormat { channels: 1, sample_rate }
    }

    /// Bytes per interleaved frame (one sample for every channel).
    pub fn frame_len(&self) -> usize {
        self.channels as usize * BYTES_PER_SAMPLE as usize
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.frame_len() as u32
    }

    /// Writes the RIFF, fmt and data chunk headers for `data_len` bytes of PCM.
    fn write_header<W: Write>(&self, out: &mut W, data_len: u32) -> io::Result<()> {
        out.write_all(b"RIFF")?;
        out.write_u32::<LittleEndian>(HEADER_LEN as u32 - 8 + data_len)?;
        out.write_all(b"WAVE")?;

        out.write_all(b"fmt ")?;
        out.write_u32::<LittleEndian>(FMT_CHUNK_LEN)?;
        out.write_u16::<LittleEndian>(PCM_FORMAT)?;
        out.write_u16::<LittleEndian>(self.channels)?;
        out.write_u32::<LittleEndian>(self.sample_rate)?;
        out.write_u32::<LittleEndian>(self.byte_rate())?;
        out.write_u16::<LittleEndian>(self.frame_len() as u16)?;
        out.write_u16::<LittleEndian>(BITS_PER_SAMPLE)?;

        out.write_all(b"data")?;
        out.write_u32::<LittleEndian>(data_len)
    }

    /// Reads the canonical header and returns the format plus the declared
    /// length of the data chunk.
    fn read_header<R: Read>(input: &mut R) -> Result<(Self, u32)> {
        expect_tag(input, b"RIFF")?;
        let _riff_len = input.read_u32::<LittleEndian>()?;
        expect_tag(input, b"WAVE")?;
        expect_tag(input, b"fmt ")?;
        let _fmt_len = input.read_u32::<LittleEndian>()?;

        let audio_format = input.read_u16::<LittleEndian>()?;
        if audio_format != PCM_FORMAT {
            return Err(Error::Wav(format!("unsupported audio format: {}", audio_format)));
        }
        let channels = input.read_u16::<LittleEndian>()?;
        let sample_rate = input.read_u32::<LittleEndian>()?;
        let _byte_rate = input.read_u32::<LittleEndian>()?;
        let _block_align = input.read_u16::<LittleEndian>()?;
        let bits = input.read_u16::<LittleEndian>()?;
        if bits != BITS_PER_SAMPLE {
            return Err(Error::Wav(format!("unsupported bits per sample: {}", bits)));
        }
        if channels == 0 || sample_rate == 0 {
            return Err(Error::Wav("channels and sample rate must be non-zero".into()));
        }

        expect_tag(input, b"data")?;
        let data_len = input.read_u32::<LittleEndian>()?;
        Ok((PcmFormat { channels, sample_rate }, data_len))
    }
}

fn expect_tag<R: Read>(input: &mut R, tag: &[u8; 4]) -> Result<()> {
    let mut found = [0u8; 4];
    input.read_exact(&mut found)?;
    if &found != tag {
        return Err(Error::Wav(format!(
            "expected chunk '{}', found '{}'",
            String::from_utf8_lossy(tag),
            String::from_utf8_lossy(&found)
        )));
    }
    Ok(())
}

/// Contains information extracted from a WAV file.
#[derive(Debug, Clone)]
pub struct WavInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub data: Vec<u8>,
    pub duration: f64,
}

impl WavInfo {
    /// The first channel's samples scaled into `[-1, 1)`.
    pub fn mono_samples(&self) -> Result<Vec<f64>> {
        let interleaved = wav_bytes_to_samples(&self.data)?;
        Ok(interleaved.into_iter().step_by(self.channels.max(1) as usize).collect())
    }
}

/// Reads a 16-bit PCM WAV file with a canonical 44-byte header.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let data = std::fs::read(path)?;
    parse_wav(&data)
}

/// Parses the bytes of a 16-bit PCM WAV file.
///
/// Only the bytes the data chunk declares are kept, so chunks that follow it
/// (`LIST`, `id3 `) are not decoded as audio. A truncated chunk keeps what is
/// present, rounded down to whole frames.
pub fn parse_wav(data: &[u8]) -> Result<WavInfo> {
    if data.len() < HEADER_LEN {
        return Err(Error::Wav("invalid WAV file size (too small)".into()));
    }
    let (format, declared) = PcmFormat::read_header(&mut Cursor::new(&data[..HEADER_LEN]))?;

    let available = data.len() - HEADER_LEN;
    let len = (declared as usize).min(available);
    let len = len - len % format.frame_len();
    let pcm = data[HEADER_LEN..HEADER_LEN + len].to_vec();

    let duration = pcm.len() as f64 / format.byte_rate() as f64;
    Ok(WavInfo {
        channels: format.channels,
        sample_rate: format.sample_rate,
        data: pcm,
        duration,
    })
}

/// Converts a slice of 16-bit PCM bytes to a vector of f64 samples scaled in the range [-1, 1].
pub fn wav_bytes_to_samples(input: &[u8]) -> Result<Vec<f64>> {
    if input.len() % 2 != 0 {
        return Err(Error::Wav("odd number of PCM bytes".into()));
    }
    Ok(input
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f64 / 32768.0)
        .collect())
}

/// Converts samples in `[-1, 1]` to little-endian 16-bit PCM, clamping outliers.
pub fn floats_to_bytes(samples: &[f64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let val = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        bytes.extend_from_slice(&val.to_le_bytes());
    }
    bytes
}

/// Writes mono samples as a 16-bit PCM WAV file.
pub fn write_wav_file<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(Error::Wav("sample rate must be greater than zero".into()));
    }
    let data = floats_to_bytes(samples);
    let mut writer = BufWriter::new(File::create(path)?);
    PcmFormat::mono(sample_rate).write_header(&mut writer, data.len() as u32)?;
    writer.write_all(&data)?;
    writer.flush()?;
    Ok(())
}
