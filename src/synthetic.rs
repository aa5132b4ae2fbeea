//! Synthetic waveform generation.
//!
//! Produces plausible-looking waveform data without decoding any audio:
//! a decaying tone envelope with per-frame noise. Used by the generator
//! binary, demos and tests.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::waveform::{WaveformChannel, WaveformData};

const DEFAULT_SAMPLE_RATE: u32 = 44100;
const DEFAULT_SAMPLES_PER_PIXEL: u32 = 512;
const DEFAULT_LENGTH: usize = 1000;
const DEFAULT_CHANNELS: usize = 1;
const DEFAULT_SEED: u64 = 42;

// Peak amplitude of the generated envelope (out of i16 range)
const PEAK_AMPLITUDE: f64 = 24000.0;

/// Deterministic generator of synthetic waveform data.
pub struct SyntheticWaveform {
    sample_rate: u32,
    samples_per_pixel: u32,
    length: usize,
    channels: usize,
    seed: u64,
}

impl SyntheticWaveform {
    pub fn new() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            samples_per_pixel: DEFAULT_SAMPLES_PER_PIXEL,
            length: DEFAULT_LENGTH,
            channels: DEFAULT_CHANNELS,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_config(
        sample_rate: u32,
        samples_per_pixel: u32,
        length: usize,
        channels: usize,
        seed: u64,
    ) -> Self {
        Self {
            sample_rate,
            samples_per_pixel,
            length,
            channels,
            seed,
        }
    }

    /// Generates the waveform. Identical configuration and seed always
    /// produce identical data.
    pub fn generate(&self) -> Result<WaveformData> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut channels = Vec::with_capacity(self.channels);
        for channel_index in 0..self.channels {
            // Small per-channel detune so stereo channels do not mirror
            let tone_cycles = 6.0 + channel_index as f64 * 0.5;

            let mut min = Vec::with_capacity(self.length);
            let mut max = Vec::with_capacity(self.length);

            for i in 0..self.length {
                let t = if self.length > 1 {
                    i as f64 / (self.length - 1) as f64
                } else {
                    0.0
                };

                let decay = 1.0 - 0.7 * t;
                let tone = (std::f64::consts::TAU * tone_cycles * t).sin().abs();
                let envelope = PEAK_AMPLITUDE * decay * (0.2 + 0.8 * tone);

                let upper = envelope * (0.8 + 0.2 * rng.gen::<f64>());
                let lower = -envelope * (0.8 + 0.2 * rng.gen::<f64>());

                max.push(upper as i16);
                min.push(lower as i16);
            }

            channels.push(WaveformChannel::new(min, max)?);
        }

        WaveformData::from_parts(self.sample_rate, self.samples_per_pixel, 16, channels)
    }
}

impl Default for SyntheticWaveform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = SyntheticWaveform::new().generate().unwrap();
        let b = SyntheticWaveform::new().generate().unwrap();

        assert_eq!(a.length(), b.length());
        for c in 0..a.channel_count() {
            assert_eq!(a.channel(c), b.channel(c));
        }
    }

    #[test]
    fn test_seed_changes_output() {
        let a = SyntheticWaveform::with_config(44100, 512, 100, 1, 1)
            .generate()
            .unwrap();
        let b = SyntheticWaveform::with_config(44100, 512, 100, 1, 2)
            .generate()
            .unwrap();

        assert_ne!(a.channel(0), b.channel(0));
    }

    #[test]
    fn test_respects_configuration() {
        let waveform = SyntheticWaveform::with_config(8000, 256, 50, 2, 7)
            .generate()
            .unwrap();

        assert_eq!(waveform.sample_rate(), 8000);
        assert_eq!(waveform.samples_per_pixel(), 256);
        assert_eq!(waveform.length(), 50);
        assert_eq!(waveform.channel_count(), 2);
    }

    #[test]
    fn test_samples_within_range() {
        let waveform = SyntheticWaveform::new().generate().unwrap();
        let channel = waveform.channel(0).unwrap();

        for i in 0..channel.len() {
            let min = channel.min_sample(i).unwrap();
            let max = channel.max_sample(i).unwrap();
            assert!(min <= 0 && max >= 0);
            assert!(min <= max);
        }
    }
}
