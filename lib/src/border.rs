//! Box-drawing frames around rendered blocks
//!
//! Widths are always measured on the visible text: ANSI escape sequences are
//! stripped before counting, so colored lines line up with plain ones.

use crate::ascii::RESET;
use regex::Regex;
use std::sync::LazyLock;

/// CSI escape: ESC '[' parameter bytes, intermediate bytes, final byte
static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]").expect("valid ANSI regex"));

/// Named frame style
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    #[default]
    Simple,
    Double,
    Rounded,
}

/// The eight characters making up a frame
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderStyle {
    /// Style by name, falling back to `Simple` for unknown names
    pub fn from_name(name: &str) -> Self {
        match name {
            "double" => BorderStyle::Double,
            "rounded" => BorderStyle::Rounded,
            _ => BorderStyle::Simple,
        }
    }

    pub fn chars(self) -> BorderChars {
        match self {
            BorderStyle::Simple => BorderChars {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
            },
            BorderStyle::Double => BorderChars {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            },
            BorderStyle::Rounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
        }
    }
}

/// Remove every CSI escape sequence
pub fn strip_ansi(line: &str) -> std::borrow::Cow<'_, str> {
    ANSI_ESCAPE.replace_all(line, "")
}

/// Character count of a line once escape sequences are removed
pub fn visible_width(line: &str) -> usize {
    strip_ansi(line).chars().count()
}

/// Wrap lines in a frame
///
/// Shorter lines are right-padded to the widest visible line. Lines
/// containing escapes get a reset before the right edge so the frame itself
/// is never colored.
pub fn draw_border(lines: &[String], style: BorderStyle) -> Vec<String> {
    let chars = style.chars();
    let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let edge: String = std::iter::repeat_n(chars.horizontal, width + 2).collect();

    let mut framed = Vec::with_capacity(lines.len() + 2);
    framed.push(format!("{}{}{}", chars.top_left, edge, chars.top_right));

    for line in lines {
        let padding = " ".repeat(width - visible_width(line));
        let reset = if line.contains('\x1b') { RESET } else { "" };
        framed.push(format!(
            "{v} {line}{padding}{reset} {v}",
            v = chars.vertical
        ));
    }

    framed.push(format!("{}{}{}", chars.bottom_left, edge, chars.bottom_right));
    framed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_visible_width_ignores_color() {
        let colored = "\x1b[38;2;255;0;0m@\x1b[38;2;0;0;255m#\x1b[0m";
        assert_eq!(visible_width(colored), 2);
        assert_eq!(visible_width(colored), visible_width(&strip_ansi(colored)));
    }

    #[test]
    fn test_visible_width_plain() {
        assert_eq!(visible_width("@%#"), 3);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn test_strip_other_csi_sequences() {
        assert_eq!(strip_ansi("\x1b[1;31mhi\x1b[K"), "hi");
    }

    #[test]
    fn test_simple_border_dimensions() {
        let framed = draw_border(&block(&["abc", "def", "ghi"]), BorderStyle::Simple);
        assert_eq!(framed.len(), 5);
        assert_eq!(framed[0], "+-----+");
        assert_eq!(framed[0].len(), 3 + 4);
        assert_eq!(framed[4], "+-----+");
        for line in &framed[1..4] {
            assert_eq!(visible_width(line), 3 + 4);
        }
        assert_eq!(framed[1], "| abc |");
    }

    #[test]
    fn test_border_pads_uneven_lines() {
        let framed = draw_border(&block(&["abcd", "a"]), BorderStyle::Simple);
        assert_eq!(framed[1], "| abcd |");
        assert_eq!(framed[2], "| a    |");
    }

    #[test]
    fn test_border_colored_line_gets_reset_before_edge() {
        let line = format!("\x1b[38;2;1;2;3m@{RESET}");
        let framed = draw_border(&[line.clone(), "@@".to_string()], BorderStyle::Rounded);
        assert_eq!(framed[0], "╭────╮");
        assert_eq!(framed[1], format!("│ {line} {RESET} │"));
        assert_eq!(framed[2], "│ @@ │");
        assert_eq!(visible_width(&framed[1]), visible_width(&framed[2]));
    }

    #[test]
    fn test_double_border_corners() {
        let framed = draw_border(&block(&["x"]), BorderStyle::Double);
        assert_eq!(framed, vec!["╔═══╗", "║ x ║", "╚═══╝"]);
    }

    #[test]
    fn test_unknown_style_falls_back_to_simple() {
        assert_eq!(BorderStyle::from_name("fancy"), BorderStyle::Simple);
        assert_eq!(BorderStyle::from_name("double"), BorderStyle::Double);
        assert_eq!(BorderStyle::from_name("rounded"), BorderStyle::Rounded);
    }
}
