use crate::args::Args;
use asciify::{AsciiArt, Result, process_image};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Lines shown by `--preview`
pub const PREVIEW_LINES: usize = 20;

/// Whether an answer to a yes/no prompt means yes
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}

/// Convert the image named by `args` and route the result
///
/// # Arguments
/// * `args` - Parsed command line
/// * `out` - Console output
/// * `color_supported` - Terminal capability query, used only with `--color`
/// * `confirm` - Asks the user a yes/no question, used only with
///   `--preview --output`
pub fn run<W, S, C>(args: &Args, out: &mut W, color_supported: S, mut confirm: C) -> Result<()>
where
    W: Write,
    S: FnOnce() -> bool,
    C: FnMut(&str) -> io::Result<bool>,
{
    let image = match image::open(&args.image) {
        Ok(image) => image,
        Err(e) => {
            writeln!(out, "Failed to open image: {e}")?;
            return Ok(());
        }
    };
    info!(
        "loaded {} ({}x{})",
        args.image.display(),
        image.width(),
        image.height()
    );

    let art = process_image(&image, &args.config(), color_supported)?;

    if args.preview {
        for line in art.preview(PREVIEW_LINES) {
            writeln!(out, "{line}")?;
        }
        if let Some(path) = &args.output {
            let question = format!("Save full result to {}? [y/N] ", path.display());
            if confirm(&question)? {
                save(&art, path, out)?;
            } else {
                writeln!(out, "Save cancelled")?;
            }
        }
        return Ok(());
    }

    match &args.output {
        Some(path) => save(&art, path, out)?,
        None => writeln!(out, "{art}")?,
    }
    Ok(())
}

fn save<W: Write>(art: &AsciiArt, path: &Path, out: &mut W) -> Result<()> {
    fs::write(path, art.to_string())?;
    writeln!(out, "ASCII art saved to {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Writes a solid `width × height` PNG and returns its path
    fn solid_png(dir: &TempDir, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
        let path = dir.path().join("input.png");
        RgbImage::from_pixel(width, height, Rgb(rgb))
            .save(&path)
            .unwrap();
        path
    }

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("asciify").chain(argv.iter().copied())).unwrap()
    }

    fn run_to_string(args: &Args, confirm: impl FnMut(&str) -> io::Result<bool>) -> String {
        let mut out = Vec::new();
        run(args, &mut out, || true, confirm).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn never_asked(_: &str) -> io::Result<bool> {
        panic!("confirmation should not be requested")
    }

    #[test]
    fn test_prints_black_square() {
        let dir = TempDir::new().unwrap();
        let input = solid_png(&dir, 2, 2, [0, 0, 0]);
        let args = parse(&[input.to_str().unwrap(), "--width", "2", "--height", "2"]);
        assert_eq!(run_to_string(&args, never_asked), "@@\n@@\n");
    }

    #[test]
    fn test_missing_image_reports_and_succeeds() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.png");
        let output = dir.path().join("out.txt");
        let args = parse(&[
            missing.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        let printed = run_to_string(&args, never_asked);
        assert!(printed.starts_with("Failed to open image:"));
        assert!(!output.exists());
    }

    #[test]
    fn test_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = solid_png(&dir, 2, 2, [0, 0, 0]);
        let output = dir.path().join("art.txt");
        let args = parse(&[
            input.to_str().unwrap(),
            "--width",
            "2",
            "--height",
            "2",
            "--output",
            output.to_str().unwrap(),
        ]);
        let printed = run_to_string(&args, never_asked);
        assert!(printed.contains("ASCII art saved to"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "@@\n@@");
    }

    #[test]
    fn test_preview_shows_centered_window() {
        let dir = TempDir::new().unwrap();
        let input = solid_png(&dir, 4, 4, [0, 0, 0]);
        let args = parse(&[
            input.to_str().unwrap(),
            "--width",
            "3",
            "--height",
            "50",
            "--preview",
        ]);
        let printed = run_to_string(&args, never_asked);
        assert_eq!(printed.lines().count(), PREVIEW_LINES);
    }

    #[test]
    fn test_preview_save_confirmed() {
        let dir = TempDir::new().unwrap();
        let input = solid_png(&dir, 4, 4, [0, 0, 0]);
        let output = dir.path().join("art.txt");
        let args = parse(&[
            input.to_str().unwrap(),
            "--width",
            "2",
            "--height",
            "30",
            "--preview",
            "--output",
            output.to_str().unwrap(),
        ]);
        let mut asked = Vec::new();
        run_to_string(&args, |q| {
            asked.push(q.to_string());
            Ok(is_affirmative("Y\n"))
        });
        assert_eq!(asked.len(), 1);
        let saved = fs::read_to_string(&output).unwrap();
        assert_eq!(saved.lines().count(), 30);
    }

    #[test]
    fn test_preview_save_declined() {
        let dir = TempDir::new().unwrap();
        let input = solid_png(&dir, 2, 2, [0, 0, 0]);
        let output = dir.path().join("art.txt");
        let args = parse(&[
            input.to_str().unwrap(),
            "--preview",
            "--output",
            output.to_str().unwrap(),
        ]);
        let printed = run_to_string(&args, |_| Ok(is_affirmative("yes")));
        assert!(printed.ends_with("Save cancelled\n"));
        assert!(!output.exists());
    }

    #[test]
    fn test_color_fallback_without_support() {
        let dir = TempDir::new().unwrap();
        let input = solid_png(&dir, 2, 2, [255, 0, 0]);
        let args = parse(&[
            input.to_str().unwrap(),
            "--width",
            "2",
            "--height",
            "2",
            "--color",
        ]);
        let mut out = Vec::new();
        run(&args, &mut out, || false, never_asked).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains('\x1b'));
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y\n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
    }
}
