//! Synthetic waveform file generator.
//!
//! Produces waveform-data JSON files for demos and testing of the viewer
//! library, without touching any real audio.

use anyhow::Result;
use std::env;

use wavescope::SyntheticWaveform;

struct Config {
    length: usize,
    sample_rate: u32,
    samples_per_pixel: u32,
    channels: usize,
    seed: u64,
    output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            length: 1000,
            sample_rate: 44100,
            samples_per_pixel: 512,
            channels: 1,
            seed: 42,
            output_file: "waveform.json".to_string(),
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-length" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-length requires an argument");
                }
                config.length = args[i].parse()?;
            }
            "-sample_rate" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-sample_rate requires an argument");
                }
                config.sample_rate = args[i].parse()?;
            }
            "-spp" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-spp requires an argument");
                }
                config.samples_per_pixel = args[i].parse()?;
            }
            "-channels" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-channels requires an argument");
                }
                config.channels = args[i].parse()?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = args[i].clone();
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Synthetic Waveform Generator");
    println!("Usage: wavescope-wavegen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -length <N>        Number of min/max frames (default: 1000)");
    println!("  -sample_rate <N>   Audio sample rate in Hz (default: 44100)");
    println!("  -spp <N>           Audio samples per frame (default: 512)");
    println!("  -channels <N>      Number of channels (default: 1)");
    println!("  -seed <N>          Generator seed (default: 42)");
    println!("  -out <FILE>        Output file path (default: waveform.json)");
    println!("  -h, -help          Show this help message");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = parse_args()?;

    let generator = SyntheticWaveform::with_config(
        config.sample_rate,
        config.samples_per_pixel,
        config.length,
        config.channels,
        config.seed,
    );

    let waveform = generator.generate()?;
    waveform.write_json_file(&config.output_file)?;

    println!(
        "Wrote {} frames x {} channels ({:.2}s at {} Hz) to {}",
        waveform.length(),
        waveform.channel_count(),
        waveform.duration(),
        waveform.sample_rate(),
        config.output_file
    );

    Ok(())
}
