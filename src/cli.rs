use anyhow::ensure;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Renders the built-in three sphere scene to a PNG file.
#[derive(Debug, Parser)]
#[command(name = "spheretracer")]
pub struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Side length of the square viewport
    #[arg(long, default_value_t = spheretracer::camera::VIEWPORT_SIZE)]
    pub viewport_size: f64,

    /// Distance from the eye to the viewport plane
    #[arg(long, default_value_t = spheretracer::camera::PROJECTION_PLANE_Z)]
    pub projection_plane_z: f64,

    /// Output PNG path
    #[arg(short, long, default_value = "image.png")]
    pub output: String,

    /// Render on the current thread only
    #[arg(long)]
    pub sequential: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Rejects settings that would leave nothing to render.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "canvas must be at least 1x1, got {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }
}
