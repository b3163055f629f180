//! Headless host for the flocking core: owns timing, quit handling and
//! frame output, and calls `advance_tick` once per frame.

pub mod host;
pub mod output;
pub mod settings;

pub use host::{HostLoop, RunSummary};
pub use output::{JsonLinesRenderer, LogRenderer};
pub use settings::{build_world, load_settings};
