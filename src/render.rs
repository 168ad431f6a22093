use core::ops::Range;

use rayon::prelude::*;

use crate::{camera::Camera, frame::FrameBuffer, scene::Scene};

/// Hits count for `t` strictly greater than 0, with no upper bound.
const T_RANGE: Range<f64> = 0.0..f64::INFINITY;

/// Casts one ray per canvas pixel, in column order.
///
/// Canvas `y` grows upwards while frame rows grow downwards, so canvas row `y`
/// lands in frame row `height - y - 1`.
pub fn render(camera: &Camera, scene: &Scene) -> FrameBuffer {
    let (width, height) = (camera.canvas_width(), camera.canvas_height());
    let mut frame_buffer = FrameBuffer::new(width as usize, height as usize);
    let rows = frame_buffer.height() as i64;

    for x in 0..width {
        for y in 0..height {
            let color = scene.trace(camera.cast(x, y), T_RANGE);
            let row = rows - i64::from(y) - 1;
            frame_buffer.set_pixel(i64::from(x), row, color);
        }
    }
    frame_buffer
}

/// Same image as [`render`], one frame row per rayon task.
pub fn render_parallel(camera: &Camera, scene: &Scene) -> FrameBuffer {
    let (width, height) = (camera.canvas_width(), camera.canvas_height());
    let mut frame_buffer = FrameBuffer::new(width as usize, height as usize);
    let row_len = frame_buffer.width();
    if row_len == 0 {
        return frame_buffer;
    }

    frame_buffer
        .pixel_data_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, pixels)| {
            let y = height - row as u32 - 1;
            for (x, pixel) in pixels.iter_mut().enumerate() {
                *pixel = scene.trace(camera.cast(x as u32, y), T_RANGE);
            }
        });
    frame_buffer
}
