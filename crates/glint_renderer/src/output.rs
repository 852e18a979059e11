//! Encoding rendered images to 8-bit output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{Color, ImageBuffer, RenderResult};

/// Convert a summed pixel color to 8-bit RGB.
///
/// The sum is averaged over `samples`, clamped to `[0, 1]`, gamma encoded
/// with exponent `1 / gamma`, and quantized with `floor(255.999 * c)`.
/// NaN channels encode as 0.
pub fn color_to_rgb(sum: Color, samples: u32, gamma: f32) -> [u8; 3] {
    let scale = 1.0 / samples.max(1) as f32;
    let inv_gamma = 1.0 / gamma;

    let encode = |c: f32| -> u8 {
        let c = (c * scale).clamp(0.0, 1.0).powf(inv_gamma);
        // Float-to-int casts saturate and map NaN to 0
        (255.999 * c) as u8
    };

    [encode(sum.x), encode(sum.y), encode(sum.z)]
}

/// Write an image as plain-text PPM (P3).
///
/// Pixels are written top row first, one `r g b` triple per line.
pub fn write_ppm<W: Write>(writer: &mut W, image: &ImageBuffer, gamma: f32) -> RenderResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y), image.samples_per_pixel, gamma);
            writeln!(writer, "{r} {g} {b}")?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Save an image to disk.
///
/// `.ppm` paths are written as plain-text PPM; any other extension is
/// encoded by the `image` crate (PNG, BMP, ...).
pub fn save_image(path: &Path, image: &ImageBuffer, gamma: f32) -> RenderResult<()> {
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let mut writer = BufWriter::new(File::create(path)?);
        write_ppm(&mut writer, image, gamma)?;
    } else {
        let encoded = image::RgbImage::from_fn(image.width, image.height, |x, y| {
            image::Rgb(color_to_rgb(image.get(x, y), image.samples_per_pixel, gamma))
        });
        encoded.save(path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgb_white() {
        assert_eq!(color_to_rgb(Color::ONE, 1, 2.0), [255, 255, 255]);
        // Sums are averaged first
        assert_eq!(color_to_rgb(Color::splat(4.0), 4, 2.0), [255, 255, 255]);
    }

    #[test]
    fn test_color_to_rgb_clamps_and_gamma_encodes() {
        assert_eq!(color_to_rgb(Color::new(-1.0, 0.0, 7.0), 1, 2.0), [0, 0, 255]);

        // 0.25 ^ (1/2) = 0.5 -> floor(127.9995)
        assert_eq!(color_to_rgb(Color::splat(0.25), 1, 2.0), [127, 127, 127]);

        // Linear output with gamma 1
        assert_eq!(color_to_rgb(Color::splat(0.5), 1, 1.0), [127, 127, 127]);
    }

    #[test]
    fn test_color_to_rgb_nan_is_black() {
        assert_eq!(color_to_rgb(Color::new(f32::NAN, 1.0, 0.0), 1, 2.0), [0, 255, 0]);
    }

    #[test]
    fn test_write_ppm_layout() {
        let mut image = ImageBuffer::new(2, 2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 1.0, 0.0));
        image.set(0, 1, Color::new(0.0, 0.0, 1.0));
        image.set(1, 1, Color::ONE);

        let mut out = Vec::new();
        write_ppm(&mut out, &image, 2.0).expect("write to memory");
        let text = String::from_utf8(out).expect("ascii output");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "P3",
                "2 2",
                "255",
                "255 0 0",
                "0 255 0",
                "0 0 255",
                "255 255 255"
            ]
        );
    }

    #[test]
    fn test_save_image_ppm_and_png() {
        let mut image = ImageBuffer::new(3, 2, 2);
        image.set(1, 1, Color::splat(2.0));
        let dir = std::env::temp_dir().join(format!("glint_output_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");

        let ppm = dir.join("out.ppm");
        save_image(&ppm, &image, 2.0).expect("save ppm");
        let text = std::fs::read_to_string(&ppm).expect("read ppm");
        assert!(text.starts_with("P3\n3 2\n255\n"));
        assert_eq!(text.lines().count(), 3 + 6);

        let png = dir.join("out.png");
        save_image(&png, &image, 2.0).expect("save png");
        let decoded = image::open(&png).expect("decode png").to_rgb8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 255, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);

        std::fs::remove_dir_all(&dir).ok();
    }
}
