//! src/canvas.rs
//! -------------
//! Pixel grid and its plain-text PPM (`P3`) serialization.

use crate::color::Color;
use image::{Rgb, RgbImage};
use rayon::prelude::*;

/// PPM readers may reject longer lines.
const MAX_LINE: usize = 70;

#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

/// `ceil(channel * 255)` clamped to a byte.
fn quantize(channel: f64) -> u8 {
    (channel * 255.0).ceil().clamp(0.0, 255.0) as u8
}

fn quantize_color(c: Color) -> [u8; 3] {
    [quantize(c.red), quantize(c.green), quantize(c.blue)]
}

impl Canvas {
    /// Panics when either side is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "canvas must be at least 1x1, got {width}x{height}"
        );
        Self {
            width,
            height,
            pixels: vec![Color::black(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Panics when `(x, y)` lies outside the grid.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Panics when `(x, y)` lies outside the grid.
    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} canvas",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Disjoint mutable rows, top to bottom, for filling in parallel.
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, Color> {
        self.pixels.par_chunks_mut(self.width)
    }

    pub fn to_ppm(&self) -> String {
        let mut out = format!("P3\n{} {}\n255\n", self.width, self.height);
        for row in self.pixels.chunks(self.width) {
            let mut line = String::with_capacity(MAX_LINE);
            for value in row.iter().flat_map(|&c| quantize_color(c)) {
                let value = value.to_string();
                if !line.is_empty() && line.len() + 1 + value.len() > MAX_LINE {
                    out.push_str(&line);
                    out.push('\n');
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&value);
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Same quantization as [`Canvas::to_ppm`], for binary image formats.
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut img = RgbImage::new(self.width as u32, self.height as u32);
        for (i, &c) in self.pixels.iter().enumerate() {
            let (x, y) = (i % self.width, i / self.width);
            img.put_pixel(x as u32, y as u32, Rgb(quantize_color(c)));
        }
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creating_a_canvas() {
        let c = Canvas::new(10, 20);
        assert_eq!(c.width(), 10);
        assert_eq!(c.height(), 20);
        assert!(c.pixels.iter().all(|p| *p == Color::black()));
    }

    #[test]
    fn writing_pixels() {
        let mut c = Canvas::new(10, 20);
        let red = Color::new(1.0, 0.0, 0.0);
        c.write_pixel(2, 3, red);
        assert_eq!(c.pixel_at(2, 3), red);
        assert_eq!(c.pixel_at(3, 2), Color::black());
    }

    #[test]
    #[should_panic]
    fn reading_outside_the_grid_panics() {
        Canvas::new(10, 20).pixel_at(10, 0);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_width_canvas_panics() {
        Canvas::new(0, 3);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_height_canvas_panics() {
        Canvas::new(4, 0);
    }

    #[test]
    fn ppm_has_one_line_per_short_row() {
        let ppm = Canvas::new(1, 4).to_ppm();
        assert_eq!(ppm.lines().skip(3).collect::<Vec<_>>(), ["0 0 0"; 4]);
    }

    #[test]
    fn ppm_header() {
        let ppm = Canvas::new(5, 3).to_ppm();
        let lines: Vec<&str> = ppm.lines().collect();
        assert_eq!(&lines[..3], &["P3", "5 3", "255"]);
    }

    #[test]
    fn ppm_pixel_data_is_clamped_and_rounded_up() {
        let mut c = Canvas::new(5, 3);
        c.write_pixel(0, 0, Color::new(1.5, 0.0, 0.0));
        c.write_pixel(2, 1, Color::new(0.0, 0.5, 0.0));
        c.write_pixel(4, 2, Color::new(-0.5, 0.0, 1.0));
        let ppm = c.to_ppm();
        let lines: Vec<&str> = ppm.lines().collect();
        assert_eq!(lines[3], "255 0 0 0 0 0 0 0 0 0 0 0 0 0 0");
        assert_eq!(lines[4], "0 0 0 0 0 0 0 128 0 0 0 0 0 0 0");
        assert_eq!(lines[5], "0 0 0 0 0 0 0 0 0 0 0 0 0 0 255");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn quantization_uses_ceiling() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(0.001), 1);
        assert_eq!(quantize(0.8), 204);
        assert_eq!(quantize(0.6), 153);
        assert_eq!(quantize(2.0), 255);
        assert_eq!(quantize(-0.1), 0);
    }

    #[test]
    fn long_rows_are_wrapped() {
        let mut c = Canvas::new(10, 2);
        for y in 0..2 {
            for x in 0..10 {
                c.write_pixel(x, y, Color::new(1.0, 0.8, 0.6));
            }
        }
        let ppm = c.to_ppm();
        let lines: Vec<&str> = ppm.lines().collect();
        let first = "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204";
        let second = "153 255 204 153 255 204 153 255 204 153 255 204 153";
        assert_eq!(lines[3..], [first, second, first, second]);
        assert!(lines.iter().all(|l| l.len() <= 70));
    }

    #[test]
    fn wrapping_never_splits_a_value() {
        let mut c = Canvas::new(23, 1);
        for x in 0..23 {
            c.write_pixel(x, 0, Color::new(0.5, 1.0, 0.01));
        }
        let ppm = c.to_ppm();
        let body: Vec<&str> = ppm.lines().skip(3).collect();
        assert!(body.len() > 1);
        for line in &body {
            assert!(line.len() <= 70);
            assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
        let values: Vec<&str> = body.iter().flat_map(|l| l.split(' ')).collect();
        assert_eq!(values.len(), 23 * 3);
        assert!(values.chunks(3).all(|v| v == ["128", "255", "3"]));
    }

    #[test]
    fn ppm_ends_with_newline() {
        assert!(Canvas::new(5, 3).to_ppm().ends_with('\n'));
    }

    #[test]
    fn rows_are_disjoint_and_ordered() {
        let mut c = Canvas::new(3, 2);
        c.par_rows_mut().enumerate().for_each(|(y, row)| {
            for px in row.iter_mut() {
                *px = Color::new(y as f64, 0.0, 0.0);
            }
        });
        assert_eq!(c.pixel_at(2, 0), Color::black());
        assert_eq!(c.pixel_at(0, 1), Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn rgb_image_matches_ppm_quantization() {
        let mut c = Canvas::new(2, 2);
        c.write_pixel(1, 0, Color::new(0.5, 1.5, -1.0));
        let img = c.to_rgb_image();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(1, 0), &Rgb([128, 255, 0]));
        assert_eq!(img.get_pixel(0, 1), &Rgb([0, 0, 0]));
    }
}
