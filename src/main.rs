use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use ditwave::{text_to_morse, MorseSynth, SynthParams, WaveShape};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to translate and synthesize
    #[arg(value_name = "TEXT")]
    text: String,

    /// Playback speed, 1 (slowest) to 100 (fastest)
    #[arg(short, long, default_value_t = 70)]
    speed: u32,

    /// Volume, 0 to 100
    #[arg(short, long, default_value_t = 75)]
    volume: u32,

    /// Tone frequency in Hz, 100 to 1000
    #[arg(short, long, default_value_t = 432)]
    frequency: u32,

    /// Oscillator shape: sine, square or sawtooth
    #[arg(short, long, default_value = "sine")]
    wave: String,

    /// Write a WAV file instead of printing a data URI to stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Set up logging. Use `RUST_LOG=info` or `RUST_LOG=debug` to see output.
    env_logger::init();
    let cli = Cli::parse();

    let morse = text_to_morse(&cli.text);
    log::info!("Morse code: {}", morse);

    let params = SynthParams {
        speed: cli.speed,
        volume: cli.volume,
        frequency: cli.frequency,
        shape: WaveShape::parse(&cli.wave),
    };

    let synth = MorseSynth::default();
    match cli.output {
        Some(path) => {
            let wav = synth.compose_morse_code_audio(&morse, &params)?;
            fs::write(&path, &wav)?;
            log::info!("Wrote {} bytes to {:?}", wav.len(), path);
        }
        None => {
            let uri = synth.compose_morse_code_data_uri(&morse, &params)?;
            println!("{}", uri);
        }
    }

    Ok(())
}
