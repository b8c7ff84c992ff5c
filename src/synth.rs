// src/synth.rs
// Morse code audio synthesis and WAV encoding

use anyhow::Result;
use base64::Engine;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::f32::consts::PI;
use std::io::Cursor;

/// Standard CD-quality sample rate used for all synthesized audio.
pub const SAMPLE_RATE: u32 = 44100;

// Base durations in seconds before speed scaling is applied.
const DASH_DURATION: f32 = 0.25;
const DOT_DURATION: f32 = 0.10;
const ELEMENT_GAP_DURATION: f32 = 0.2;
const WORD_GAP_DURATION: f32 = 0.4;
// At most this many consecutive word-gap silences are emitted; further
// spaces in a run are dropped to avoid runaway silence.
const MAX_CONSECUTIVE_GAPS: u32 = 2;

/// Oscillator shape for tone generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveShape {
    #[default]
    Sine,
    Square,
    Sawtooth,
}

impl WaveShape {
    /// Parses a shape name. Unrecognized names fall back to [`WaveShape::Sine`];
    /// this fallback is deliberate, not an error.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "square" => WaveShape::Square,
            "sawtooth" => WaveShape::Sawtooth,
            _ => WaveShape::Sine,
        }
    }
}

/// Synthesis parameters. All values are clamped to their documented ranges
/// before use, so any combination is valid input.
#[derive(Debug, Clone, Copy)]
pub struct SynthParams {
    /// Playback speed, 1 (slowest) to 100 (fastest).
    pub speed: u32,
    /// Output volume, 0 to 100 percent of full scale.
    pub volume: u32,
    /// Tone frequency in Hz, 100 to 1000.
    pub frequency: u32,
    pub shape: WaveShape,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            speed: 70,
            volume: 75,
            frequency: 432,
            shape: WaveShape::Sine,
        }
    }
}

impl SynthParams {
    fn clamped(&self) -> Self {
        Self {
            speed: self.speed.clamp(1, 100),
            volume: self.volume.min(100),
            frequency: self.frequency.clamp(100, 1000),
            shape: self.shape,
        }
    }

    /// Seconds-per-unit scale factor derived from speed. Speed 1 maps to
    /// 4.0 (longest units), speed 100 to roughly 0.15 (shortest).
    fn unit_scale(&self) -> f32 {
        4.0 - (3.85 / 99.0) * (self.speed as f32 - 1.0)
    }
}

pub struct MorseSynth {
    sample_rate: u32,
}

impl Default for MorseSynth {
    fn default() -> Self {
        Self::new(SAMPLE_RATE)
    }
}

impl MorseSynth {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Synthesizes a Morse code string into a mono 16-bit WAV container.
    ///
    /// `·` and `-` produce tones, a space produces a word-gap silence (capped
    /// at two in a row), and any other character is skipped without affecting
    /// the surrounding timing. The only failure mode is a container write
    /// error from the WAV encoder.
    pub fn compose_morse_code_audio(&self, morse: &str, params: &SynthParams) -> Result<Vec<u8>> {
        let params = params.clamped();
        let scale = params.unit_scale();

        let spec = WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, spec)?;

        let mut silence_count = 0u32;
        for ch in morse.chars() {
            match ch {
                '-' => {
                    silence_count = 0;
                    self.write_tone(&mut writer, DASH_DURATION * scale, &params)?;
                    self.write_silence(&mut writer, ELEMENT_GAP_DURATION * scale)?;
                }
                '·' => {
                    silence_count = 0;
                    self.write_tone(&mut writer, DOT_DURATION * scale, &params)?;
                    self.write_silence(&mut writer, ELEMENT_GAP_DURATION * scale)?;
                }
                ' ' if silence_count < MAX_CONSECUTIVE_GAPS => {
                    silence_count += 1;
                    self.write_silence(&mut writer, WORD_GAP_DURATION * scale)?;
                }
                // Excess spaces, the unknown marker and anything else
                // contribute no samples.
                _ => {}
            }
        }

        writer.finalize()?;
        log::debug!(
            "synthesized {} bytes of WAV audio for {} morse chars",
            cursor.get_ref().len(),
            morse.chars().count()
        );
        Ok(cursor.into_inner())
    }

    /// Like [`compose_morse_code_audio`](Self::compose_morse_code_audio) but
    /// wraps the WAV bytes in a base64 `data:audio/wav` URI for direct
    /// embedding in an audio element.
    pub fn compose_morse_code_data_uri(&self, morse: &str, params: &SynthParams) -> Result<String> {
        let wav = self.compose_morse_code_audio(morse, params)?;
        let b64 = base64::engine::general_purpose::STANDARD.encode(&wav);
        Ok(format!("data:audio/wav;base64,{b64}"))
    }

    fn write_tone<W: std::io::Write + std::io::Seek>(
        &self,
        writer: &mut WavWriter<W>,
        duration: f32,
        params: &SynthParams,
    ) -> Result<()> {
        let samples = (duration * self.sample_rate as f32).round() as usize;
        let freq = params.frequency as f32;
        let amplitude = i16::MAX as f32 * (params.volume as f32 / 100.0);
        for i in 0..samples {
            let t = i as f32 / self.sample_rate as f32;
            let raw = match params.shape {
                WaveShape::Sine => (2.0 * PI * freq * t).sin(),
                WaveShape::Square => (2.0 * PI * freq * t).sin().signum(),
                WaveShape::Sawtooth => ((t * freq) % 1.0) * 2.0 - 1.0,
            };
            writer.write_sample((raw * amplitude) as i16)?;
        }
        Ok(())
    }

    fn write_silence<W: std::io::Write + std::io::Seek>(
        &self,
        writer: &mut WavWriter<W>,
        duration: f32,
    ) -> Result<()> {
        let samples = (duration * self.sample_rate as f32).round() as usize;
        for _ in 0..samples {
            writer.write_sample(0i16)?;
        }
        Ok(())
    }
}
