use std::path::Path;

use anyhow::Context;
use log::info;

use spheretracer::frame::FrameBuffer;

/// Encodes the frame as an opaque RGB PNG.
pub fn save_png(frame_buffer: &FrameBuffer, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    frame_buffer
        .to_rgb_image()
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("image saved as {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spheretracer::frame::{Color, Rgba32};

    #[test]
    fn saved_png_reads_back_opaque() {
        let mut frame = FrameBuffer::new(3, 2);
        frame[(0, 0)] = Color::RED;
        frame[(2, 1)] = Color::new(1, 2, 3, 0);

        let path = std::env::temp_dir().join(format!("spheretracer-{}.png", std::process::id()));
        save_png(&frame, &path).unwrap();
        let decoded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0).to_rgba32(), (255, 0, 0, 255));
        assert_eq!(decoded.get_pixel(2, 1).to_rgba32(), (1, 2, 3, 255));
        assert_eq!(decoded.get_pixel(1, 0).to_rgba32(), (0, 0, 0, 255));
    }

    #[test]
    fn writes_png_whatever_the_extension() {
        let frame = FrameBuffer::new(2, 2);
        let path = std::env::temp_dir().join(format!("spheretracer-{}.jpg", std::process::id()));
        save_png(&frame, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
            .unwrap()
            .to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 2));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let frame = FrameBuffer::new(1, 1);
        let path = std::env::temp_dir()
            .join("spheretracer-missing-dir")
            .join("nested")
            .join("image.png");
        let err = save_png(&frame, &path).unwrap_err();
        assert!(err.to_string().contains("image.png"));
    }
}
