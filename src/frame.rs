use std::ops::{Index, IndexMut};

pub trait Rgba32 {
    fn to_rgba32(&self) -> (u8, u8, u8, u8);
    fn from_rgba32(rgba: (u8, u8, u8, u8)) -> Self;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
    pub const GREEN: Color = Color::new(0, 255, 0, 255);
    pub const BLUE: Color = Color::new(0, 0, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Rgba32 for Color {
    fn to_rgba32(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    fn from_rgba32((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl Rgba32 for image::Rgb<u8> {
    /// The encoded image carries no alpha, so it reads back as opaque.
    fn to_rgba32(&self) -> (u8, u8, u8, u8) {
        let [r, g, b] = self.0;
        (r, g, b, 255)
    }

    fn from_rgba32((r, g, b, _): (u8, u8, u8, u8)) -> Self {
        image::Rgb([r, g, b])
    }
}

/// Row-major pixel storage, `(0, 0)` is the top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixel_data: Box<[Color]>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixel_data: vec![Color::default(); width * height].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_data(&self) -> &[Color] {
        &self.pixel_data
    }

    pub fn pixel_data_mut(&mut self) -> &mut [Color] {
        &mut self.pixel_data
    }

    /// Writes outside the buffer are dropped.
    pub fn set_pixel<T: Rgba32>(&mut self, x: i64, y: i64, color: T) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let index = x as usize + y as usize * self.width;
        self.pixel_data[index] = Color::from_rgba32(color.to_rgba32());
    }

    pub fn get_pixel<T: Rgba32>(&self, x: usize, y: usize) -> T {
        T::from_rgba32(self[(x, y)].to_rgba32())
    }

    /// Alpha is dropped, every output pixel is opaque.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.get_pixel(x as usize, y as usize)
        })
    }
}

impl Index<(usize, usize)> for FrameBuffer {
    type Output = Color;

    fn index(&self, (x, y): (usize, usize)) -> &Color {
        &self.pixel_data[x + y * self.width]
    }
}

impl IndexMut<(usize, usize)> for FrameBuffer {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Color {
        &mut self.pixel_data[x + y * self.width]
    }
}
