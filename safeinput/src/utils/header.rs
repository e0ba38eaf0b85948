//! Bordered banner used to title console screens.
//!
//! ```text
//! ************************************************************
//! ***                     Hello                            ***
//! ************************************************************
//! ```
use std::io::{self, Write};

/// Total width of the banner, in characters.
pub const SCREEN_WIDTH: usize = 60;
/// Number of `*` on each side of the message line.
pub const SIDE_STARS: usize = 3;

/// Builds the three banner lines for `message`.
///
/// The message is centred between the side borders; when the padding is odd
/// the extra space goes on the left. A message longer than
/// `SCREEN_WIDTH - 2 * SIDE_STARS` characters gets no padding at all and the
/// middle line grows past `SCREEN_WIDTH`.
pub fn header_lines(message: &str) -> [String; 3] {
    let border = "*".repeat(SCREEN_WIDTH);
    let side = "*".repeat(SIDE_STARS);

    let available = (SCREEN_WIDTH - SIDE_STARS * 2).saturating_sub(message.chars().count());
    let left = available / 2 + available % 2;
    let right = available - left;

    let middle = format!(
        "{side}{}{message}{}{side}",
        " ".repeat(left),
        " ".repeat(right)
    );

    [border.clone(), middle, border]
}

/// Writes the banner for `message` to `out`.
pub fn pretty_header<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    for line in header_lines(message) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_borders() {
        let [top, _, bottom] = header_lines("Hello");
        assert_eq!(top, "*".repeat(60));
        assert_eq!(bottom, top);
    }

    #[test]
    fn test_header_odd_padding_goes_left() {
        // 54 - 5 = 49 spaces: 25 left, 24 right
        let [_, middle, _] = header_lines("Hello");
        assert_eq!(middle.chars().count(), SCREEN_WIDTH);
        assert_eq!(middle, format!("***{}Hello{}***", " ".repeat(25), " ".repeat(24)));
    }

    #[test]
    fn test_header_even_padding() {
        let [_, middle, _] = header_lines("Hi");
        assert_eq!(middle, format!("***{}Hi{}***", " ".repeat(26), " ".repeat(26)));
    }

    #[test]
    fn test_header_exact_fit() {
        let message = "x".repeat(54);
        let [_, middle, _] = header_lines(&message);
        assert_eq!(middle, format!("***{}***", message));
    }

    #[test]
    fn test_header_too_wide_is_not_padded() {
        let message = "y".repeat(70);
        let [top, middle, _] = header_lines(&message);
        assert_eq!(top.len(), 60);
        assert_eq!(middle, format!("***{}***", message));
        assert_eq!(middle.len(), 76);
    }

    #[test]
    fn test_header_counts_chars_not_bytes() {
        let [_, middle, _] = header_lines("Añø");
        assert_eq!(middle.chars().count(), SCREEN_WIDTH);
    }

    #[test]
    fn test_pretty_header_writes_three_lines() {
        let mut out = Vec::new();
        pretty_header(&mut out, "Welcome").unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Welcome"));
    }
}
