/// Basic example: convert a synthesized image to ASCII art
///
/// Draws a gradient with a bright disc in the middle and prints it with a
/// rounded border, in color when the terminal supports it.
use asciify::{AsciiConfig, BorderStyle, Charset, process_image, supports_ansi_color};
use image::{DynamicImage, Rgb, RgbImage};

fn main() {
    println!("asciify - Basic Example");
    println!("=======================\n");

    let width = 320;
    let height = 200;
    let mut img = RgbImage::new(width, height);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 60.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            let pixel = if dist < radius {
                Rgb([250, 220, 80])
            } else {
                // Horizontal gradient, blue to red
                let t = x as f32 / width as f32;
                Rgb([(t * 255.0) as u8, 40, ((1.0 - t) * 255.0) as u8])
            };
            img.put_pixel(x, y, pixel);
        }
    }

    println!("Created test image: {}x{}", width, height);

    let config = AsciiConfig {
        width: 60,
        charset: Charset::Complex,
        contrast: 1.2,
        color: true,
        border: Some(BorderStyle::Rounded),
        ..Default::default()
    };

    let art = process_image(&DynamicImage::ImageRgb8(img), &config, supports_ansi_color)
        .expect("Failed to convert image");

    println!("{art}");
}
