use anyhow::{Context, Result};
use flock_core::{draw_agents, Renderer, World};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed: Duration,
}

/// Fixed-step driver: tick, draw, pace, until the tick limit or a quit
/// request.
pub struct HostLoop<R> {
    world: World,
    renderer: R,
    pacing: Option<Duration>,
    max_ticks: Option<u64>,
    quit: Arc<AtomicBool>,
}

impl<R> HostLoop<R>
where
    R: Renderer,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    pub fn new(world: World, renderer: R) -> Self {
        Self {
            world,
            renderer,
            pacing: None,
            max_ticks: None,
            quit: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sleep between ticks so the loop runs at `tick_rate_hz`
    pub fn with_pacing(mut self, tick_rate_hz: f64) -> Result<Self> {
        let interval = Duration::try_from_secs_f64(1.0 / tick_rate_hz)
            .with_context(|| format!("Tick rate {} Hz has no usable tick interval", tick_rate_hz))?;
        self.pacing = Some(interval);
        Ok(self)
    }

    /// Stop once the world has completed `ticks` ticks; `0` means no limit
    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = (ticks > 0).then_some(ticks);
        self
    }

    /// Flag that ends the run at the next tick boundary when set
    pub fn quit_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn into_parts(self) -> (World, R) {
        (self.world, self.renderer)
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        log::info!(
            "Starting main loop with {} agents{}",
            self.world.agents().len(),
            match self.max_ticks {
                Some(max) => format!(" for {} ticks", max),
                None => String::new(),
            }
        );

        let start = Instant::now();
        let start_tick = self.world.tick();
        let mut ticks_since_report = 0u64;
        let mut last_report = Instant::now();

        loop {
            if self.quit.load(Ordering::Relaxed) {
                log::info!("Quit requested");
                break;
            }
            if self.max_ticks.is_some_and(|max| self.world.tick() >= max) {
                break;
            }

            let frame_start = Instant::now();

            self.world.advance_tick();
            draw_agents(
                self.world.tick(),
                self.world.agents(),
                self.world.config(),
                &mut self.renderer,
            )
            .with_context(|| format!("Failed to render tick {}", self.world.tick()))?;

            ticks_since_report += 1;
            if last_report.elapsed().as_secs() >= 1 {
                let rate = ticks_since_report as f64 / last_report.elapsed().as_secs_f64();
                log::info!("tick {} ({:.1} ticks/s)", self.world.tick(), rate);
                ticks_since_report = 0;
                last_report = Instant::now();
            }

            if let Some(interval) = self.pacing {
                let spent = frame_start.elapsed();
                if spent < interval {
                    thread::sleep(interval - spent);
                }
            }
        }

        let summary = RunSummary {
            ticks: self.world.tick() - start_tick,
            elapsed: start.elapsed(),
        };
        log::info!(
            "Stopped after {} ticks in {:.2?}",
            summary.ticks,
            summary.elapsed
        );
        Ok(summary)
    }
}
