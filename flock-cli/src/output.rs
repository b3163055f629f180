use flock_core::{Agent, Renderer, Triangle, Vector2D};
use flock_shared::{AgentSnapshot, FrameSnapshot};
use std::convert::Infallible;
use std::io::{self, Write};

/// Writes one JSON line per frame with every agent's shape
pub struct JsonLinesRenderer<W: Write> {
    writer: W,
    frame: FrameSnapshot,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: FrameSnapshot::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    type Error = io::Error;

    fn begin_frame(&mut self, tick: u64) -> io::Result<()> {
        self.frame.tick = tick;
        self.frame.agents.clear();
        Ok(())
    }

    fn draw(&mut self, agent: &Agent, shape: &Triangle) -> io::Result<()> {
        self.frame.agents.push(AgentSnapshot::new(agent, shape));
        Ok(())
    }

    fn end_frame(&mut self) -> io::Result<()> {
        let line = self.frame.to_json_line()?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

/// Draws nothing; logs each frame's population and mean position at debug level
#[derive(Debug, Default)]
pub struct LogRenderer {
    tick: u64,
    count: usize,
    sum: Vector2D,
}

impl Renderer for LogRenderer {
    type Error = Infallible;

    fn begin_frame(&mut self, tick: u64) -> Result<(), Infallible> {
        self.tick = tick;
        self.count = 0;
        self.sum = Vector2D::zero();
        Ok(())
    }

    fn draw(&mut self, agent: &Agent, _shape: &Triangle) -> Result<(), Infallible> {
        self.count += 1;
        self.sum += agent.position;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Infallible> {
        if self.count > 0 {
            let mean = self.sum / self.count as f64;
            log::debug!(
                "tick {}: {} agents, mean position ({:.1}, {:.1})",
                self.tick,
                self.count,
                mean.x,
                mean.y
            );
        }
        Ok(())
    }
}
