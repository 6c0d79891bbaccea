use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use vedirect_rs::logging::init_logger_with_filter;
use vedirect_rs::vedirect::{open_serial, pump};
use vedirect_rs::{log_info, DecoderConfig, FrameDecoder, SerialConfig, SnapshotHandle};

#[derive(Parser)]
#[command(name = "vedirect-cli")]
#[command(about = "CLI tool for the VE.Direct text protocol")]
struct Cli {
    /// Default log filter when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// JSON decoder configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Minimum milliseconds between committed snapshots (overrides --config)
    #[arg(long, global = true)]
    throttle_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a live serial port and print the snapshot periodically
    Listen {
        port: String,
        #[arg(short, long, default_value = "19200")]
        baudrate: u32,
        /// Seconds between printed snapshots
        #[arg(short, long, default_value = "5")]
        interval: u64,
        /// Log every raw line received
        #[arg(long)]
        raw: bool,
    },
    /// Decode a captured byte stream and print the last snapshot
    Decode {
        file: PathBuf,
        /// Also print decoder counters
        #[arg(long)]
        stats: bool,
    },
}

fn load_config(cli: &Cli, fallback_throttle_ms: u64) -> anyhow::Result<DecoderConfig> {
    let mut config = match &cli.config {
        Some(path) => DecoderConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DecoderConfig {
            throttle_ms: fallback_throttle_ms,
        },
    };
    if let Some(ms) = cli.throttle_ms {
        config = DecoderConfig::with_throttle(Duration::from_millis(ms))?;
    }
    Ok(config)
}

fn print_snapshot(handle: &SnapshotHandle) -> anyhow::Result<()> {
    match handle.current() {
        Some(snapshot) => println!("{}", snapshot.to_json()?),
        None => println!("{{\"data\":null}}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger_with_filter(&cli.log_level);

    match &cli.command {
        Commands::Listen {
            port,
            baudrate,
            interval,
            raw,
        } => {
            let config = load_config(&cli, DecoderConfig::default().throttle_ms)?;
            let serial = SerialConfig {
                baudrate: *baudrate,
                ..SerialConfig::default()
            };
            let mut stream =
                open_serial(port, &serial).with_context(|| format!("opening {port}"))?;

            let mut decoder = FrameDecoder::new(config);
            if *raw {
                decoder.set_tap(|line: &[u8]| log_info(&line.escape_ascii().to_string()));
            }
            let handle = decoder.snapshot_handle();

            let mut reader = tokio::spawn(async move {
                pump(&mut stream, &mut decoder).await.map(|_| decoder)
            });
            let mut ticker = tokio::time::interval(Duration::from_secs((*interval).max(1)));

            loop {
                tokio::select! {
                    _ = ticker.tick() => print_snapshot(&handle)?,
                    done = &mut reader => {
                        let decoder = done.context("reader task failed")??;
                        log_info(&format!("Port closed, stats: {}", decoder.stats().to_json()?));
                        print_snapshot(&handle)?;
                        break;
                    }
                }
            }
        }
        Commands::Decode { file, stats } => {
            // Captures replay faster than real time, so commit every frame by default.
            let config = load_config(&cli, 0)?;
            let mut input = tokio::fs::File::open(file)
                .await
                .with_context(|| format!("opening {}", file.display()))?;

            let mut decoder = FrameDecoder::new(config);
            let fed = pump(&mut input, &mut decoder).await?;
            log_info(&format!("Decoded {fed} bytes"));

            print_snapshot(&decoder.snapshot_handle())?;
            if *stats {
                println!("{}", decoder.stats().to_json()?);
            }
        }
    }

    Ok(())
}
