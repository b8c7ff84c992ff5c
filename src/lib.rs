// src/lib.rs
// Library interface for ditwave

pub mod synth;
pub mod translator;

pub use synth::{MorseSynth, SynthParams, WaveShape, SAMPLE_RATE};
pub use translator::text_to_morse;
