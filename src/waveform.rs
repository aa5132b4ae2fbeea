//! Waveform data model and JSON waveform-data format support.
//!
//! Holds decoded waveform peaks: per-channel min/max sample pairs at a fixed
//! samples-per-pixel scale. This is the shared data both waveform views are
//! constructed from. Only the JSON interchange format is supported here.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use once_cell::sync::OnceCell;
use serde::Deserialize;

/// Serialized form of the waveform-data JSON format.
///
/// Version 1 files are always mono and omit the `channels` field; version 2
/// files carry an explicit channel count. `data` holds interleaved min/max
/// sample pairs, frame-major: for frame `i` and channel `c` the pair lives at
/// `(i * channels + c) * 2`.
#[derive(Debug, Clone, Deserialize)]
struct WaveformJson {
    version: u32,
    #[serde(default = "default_channel_count")]
    channels: u32,
    sample_rate: u32,
    samples_per_pixel: u32,
    bits: u32,
    length: u64,
    data: Vec<i32>,
}

fn default_channel_count() -> u32 {
    1
}

/// Min/max sample pairs for a single audio channel.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformChannel {
    min: Vec<i16>,
    max: Vec<i16>,
}

impl WaveformChannel {
    /// Creates a channel from parallel min/max vectors of equal length.
    pub fn new(min: Vec<i16>, max: Vec<i16>) -> Result<Self> {
        if min.len() != max.len() {
            bail!(
                "channel min/max length mismatch: {} vs {}",
                min.len(),
                max.len()
            );
        }
        Ok(Self { min, max })
    }

    /// Number of min/max pairs in this channel.
    pub fn len(&self) -> usize {
        self.min.len()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty()
    }

    /// Minimum sample value at the given index.
    pub fn min_sample(&self, index: usize) -> Option<i16> {
        self.min.get(index).copied()
    }

    /// Maximum sample value at the given index.
    pub fn max_sample(&self, index: usize) -> Option<i16> {
        self.max.get(index).copied()
    }
}

/// Decoded waveform data shared by all views.
///
/// Each of the `length` frames covers `samples_per_pixel` audio samples, so
/// the represented duration is `length * samples_per_pixel / sample_rate`
/// seconds.
#[derive(Debug)]
pub struct WaveformData {
    sample_rate: u32,
    samples_per_pixel: u32,
    bits: u32,
    length: usize,
    channels: Vec<WaveformChannel>,

    // Lazily computed global (min, max) over all channels
    amplitude_extent: OnceCell<(i16, i16)>,
}

impl WaveformData {
    /// Builds waveform data from already-decoded channels.
    ///
    /// All channels must have the same number of frames; `sample_rate` and
    /// `samples_per_pixel` must be non-zero; `bits` must be 8 or 16.
    pub fn from_parts(
        sample_rate: u32,
        samples_per_pixel: u32,
        bits: u32,
        channels: Vec<WaveformChannel>,
    ) -> Result<Self> {
        if sample_rate == 0 {
            bail!("sample_rate must be non-zero");
        }
        if samples_per_pixel == 0 {
            bail!("samples_per_pixel must be non-zero");
        }
        if bits != 8 && bits != 16 {
            bail!("unsupported sample resolution: {} bits", bits);
        }
        if channels.is_empty() {
            bail!("waveform must have at least one channel");
        }

        let length = channels[0].len();
        for (i, channel) in channels.iter().enumerate() {
            if channel.len() != length {
                bail!(
                    "channel {} has {} frames, expected {}",
                    i,
                    channel.len(),
                    length
                );
            }
        }

        Ok(Self {
            sample_rate,
            samples_per_pixel,
            bits,
            length,
            channels,
            amplitude_extent: OnceCell::new(),
        })
    }

    /// Parses waveform data from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: WaveformJson =
            serde_json::from_str(json).context("failed to parse waveform JSON")?;
        Self::from_json(parsed)
    }

    /// Parses waveform data from a JSON reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let parsed: WaveformJson =
            serde_json::from_reader(reader).context("failed to parse waveform JSON")?;
        Self::from_json(parsed)
    }

    /// Loads waveform data from a JSON file on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open waveform file: {}", path.display()))?;
        Self::from_json_reader(BufReader::new(file))
            .with_context(|| format!("invalid waveform file: {}", path.display()))
    }

    fn from_json(parsed: WaveformJson) -> Result<Self> {
        if parsed.version != 1 && parsed.version != 2 {
            bail!("unsupported waveform data version: {}", parsed.version);
        }
        if parsed.version == 1 && parsed.channels != 1 {
            bail!("version 1 waveform data must be mono");
        }
        if parsed.channels == 0 {
            bail!("waveform must have at least one channel");
        }

        let length = parsed.length as usize;
        let channel_count = parsed.channels as usize;
        let expected = length * channel_count * 2;
        if parsed.data.len() != expected {
            bail!(
                "waveform data has {} values, expected {} ({} frames x {} channels x 2)",
                parsed.data.len(),
                expected,
                length,
                channel_count
            );
        }

        // De-interleave frame-major min/max pairs into per-channel vectors.
        let mut channels = Vec::with_capacity(channel_count);
        for c in 0..channel_count {
            let mut min = Vec::with_capacity(length);
            let mut max = Vec::with_capacity(length);
            for i in 0..length {
                let base = (i * channel_count + c) * 2;
                min.push(clamp_sample(parsed.data[base]));
                max.push(clamp_sample(parsed.data[base + 1]));
            }
            channels.push(WaveformChannel { min, max });
        }

        Self::from_parts(
            parsed.sample_rate,
            parsed.samples_per_pixel,
            parsed.bits,
            channels,
        )
    }

    // ===== Accessors =====

    /// Number of frames (min/max pairs per channel).
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of audio channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Returns a channel by index.
    pub fn channel(&self, index: usize) -> Option<&WaveformChannel> {
        self.channels.get(index)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Duration of the represented audio in seconds.
    pub fn duration(&self) -> f64 {
        self.length as f64 * self.samples_per_pixel as f64 / self.sample_rate as f64
    }

    /// Time in seconds at the start of the given frame index.
    pub fn time_for_index(&self, index: usize) -> f64 {
        index as f64 * self.samples_per_pixel as f64 / self.sample_rate as f64
    }

    /// Frame index containing the given time, clamped to `[0, length]`.
    pub fn index_for_time(&self, time: f64) -> usize {
        if time <= 0.0 {
            return 0;
        }
        let index = (time * self.sample_rate as f64 / self.samples_per_pixel as f64) as usize;
        index.min(self.length)
    }

    /// Global (min, max) sample values across all channels.
    ///
    /// Computed on first access and cached; an empty waveform yields (0, 0).
    pub fn amplitude_extent(&self) -> (i16, i16) {
        *self.amplitude_extent.get_or_init(|| {
            let mut min = i16::MAX;
            let mut max = i16::MIN;
            for channel in &self.channels {
                for i in 0..channel.len() {
                    min = min.min(channel.min[i]);
                    max = max.max(channel.max[i]);
                }
            }
            if min > max {
                (0, 0)
            } else {
                (min, max)
            }
        })
    }

    // ===== Serialization =====

    /// Serializes back to the version 2 JSON waveform-data format.
    pub fn to_json_value(&self) -> serde_json::Value {
        let channel_count = self.channels.len();
        let mut data = Vec::with_capacity(self.length * channel_count * 2);
        for i in 0..self.length {
            for channel in &self.channels {
                data.push(channel.min[i] as i32);
                data.push(channel.max[i] as i32);
            }
        }

        serde_json::json!({
            "version": 2,
            "channels": channel_count as u32,
            "sample_rate": self.sample_rate,
            "samples_per_pixel": self.samples_per_pixel,
            "bits": self.bits,
            "length": self.length as u64,
            "data": data,
        })
    }

    /// Writes the waveform to a JSON file.
    pub fn write_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create waveform file: {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &self.to_json_value())
            .with_context(|| format!("failed to write waveform file: {}", path.display()))?;
        Ok(())
    }
}

fn clamp_sample(value: i32) -> i16 {
    value.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
