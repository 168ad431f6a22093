use std::time::Instant;

use clap::Parser;
use log::{debug, info};

mod cli;
mod logger;
mod output;

use cli::Args;
use spheretracer::{camera::Camera, render, scene::Scene};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.into());

    args.validate()?;

    let camera = Camera::new(
        args.width,
        args.height,
        args.viewport_size,
        args.projection_plane_z,
    );
    let scene = Scene::reference();
    debug!("{:?}", camera);
    for sphere in scene.spheres() {
        debug!(
            "sphere at {:?} radius {} color {:?}",
            sphere.center.as_slice(),
            sphere.radius,
            sphere.color
        );
    }

    debug!("background {:?}", scene.background());

    info!(
        "rendering {}x{} with {} spheres ({})",
        args.width,
        args.height,
        scene.spheres().len(),
        if args.sequential { "sequential" } else { "parallel" }
    );
    let now = Instant::now();
    let frame_buffer = if args.sequential {
        render::render(&camera, &scene)
    } else {
        render::render_parallel(&camera, &scene)
    };
    info!(
        "rendered {}x{} frame in {:.2?}",
        frame_buffer.width(),
        frame_buffer.height(),
        now.elapsed()
    );

    output::save_png(&frame_buffer, &args.output)
}
