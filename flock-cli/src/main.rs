use anyhow::{Context, Result};
use clap::Parser;
use flock_cli::{build_world, load_settings, HostLoop, JsonLinesRenderer, LogRenderer};
use flock_core::Renderer;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless boid flocking simulation", long_about = None)]
struct Args {
    /// JSON settings file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World width
    #[arg(long)]
    width: Option<f64>,

    /// World height
    #[arg(long)]
    height: Option<f64>,

    /// Number of agents
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for initial placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks (0 runs until 'q' is entered on stdin)
    #[arg(short, long, default_value_t = 0)]
    ticks: u64,

    /// Pace ticks at the configured tick rate instead of running flat out
    #[arg(short, long)]
    realtime: bool,

    /// Write a JSON line per frame to this file, or '-' for stdout
    #[arg(short, long)]
    frames: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Set `quit` when a line starting with 'q' arrives on stdin
fn watch_stdin(quit: Arc<AtomicBool>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim_start().starts_with('q') => {
                    quit.store(true, Ordering::Relaxed);
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Stopped reading stdin: {}", e);
                    break;
                }
            }
        }
    });
}

fn run<R>(mut host: HostLoop<R>, unbounded: bool) -> Result<()>
where
    R: Renderer,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    if unbounded {
        log::info!("Enter 'q' to quit");
    }
    watch_stdin(host.quit_handle());
    host.run().context("Simulation error")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(count) = args.count {
        settings.agent_count = count;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    log::info!("Boid simulation starting...");
    log::info!("World: {} x {}", settings.width, settings.height);
    log::info!("Agents: {}", settings.agent_count);

    let world = build_world(&settings).context("Failed to initialize simulation")?;
    let unbounded = args.ticks == 0;

    match args.frames.as_deref() {
        Some(target) => {
            let writer: Box<dyn Write> = if target == "-" {
                Box::new(io::stdout().lock())
            } else {
                let file = File::create(target)
                    .with_context(|| format!("Failed to create frame output {}", target))?;
                Box::new(BufWriter::new(file))
            };
            let mut host = HostLoop::new(world, JsonLinesRenderer::new(writer))
                .with_max_ticks(args.ticks);
            if args.realtime {
                host = host.with_pacing(settings.tick_rate_hz)?;
            }
            run(host, unbounded)
        }
        None => {
            let mut host = HostLoop::new(world, LogRenderer::default()).with_max_ticks(args.ticks);
            if args.realtime {
                host = host.with_pacing(settings.tick_rate_hz)?;
            }
            run(host, unbounded)
        }
    }
}
