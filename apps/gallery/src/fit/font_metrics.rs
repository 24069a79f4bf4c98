//! Static font-metric table and the headless height measurer built on it.
//!
//! Character widths are in em units (relative to font size), taken from the
//! Helvetica AFM advance widths. Browsers render card bios with whatever sans
//! the stylesheet picks, so this is an estimate: it reproduces wrapping well
//! enough to choose a font size, not to predict pixels exactly.
//! The table covers ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use crate::fit::measure::TextMeasurer;

/// Share of the card width available to the bio text (card minus its side padding).
pub const CARD_TEXT_WIDTH_RATIO: f32 = 0.84;
/// Bio line height, as a multiple of the font size.
pub const BIO_LINE_HEIGHT: f32 = 1.45;

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table.
///
/// `widths[i]` = width of ASCII character `(i + 32)` at 1em.
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (accented letters, punctuation, emoji).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Width of a string in em units. Non-ASCII characters use `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Number of lines `s` wraps to at `max_width_em`, using greedy word-wrap.
    ///
    /// A single word wider than the line still takes one line (browsers overflow it).
    pub fn wrapped_lines(&self, s: &str, max_width_em: f32) -> usize {
        let mut lines = 0usize;
        let mut current = 0.0_f32;

        for word in s.split_whitespace() {
            let word_w = self.measure_str(word);
            if lines == 0 {
                lines = 1;
                current = word_w;
            } else if current + self.space_width + word_w > max_width_em {
                lines += 1;
                current = word_w;
            } else {
                current += self.space_width + word_w;
            }
        }
        lines
    }
}

/// Helvetica advance widths.
pub static HELVETICA: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.52,
    space_width: 0.278,
};

// ────────────────────────────────────────────────────────────────────────────
// Measurer
// ────────────────────────────────────────────────────────────────────────────

/// Estimates the rendered height of a bio paragraph inside a card of width `cw`.
pub struct MetricMeasurer {
    table: &'static FontMetricTable,
    text_width_px: f32,
    line_height: f32,
}

impl MetricMeasurer {
    pub fn new(table: &'static FontMetricTable, text_width_px: f32, line_height: f32) -> Self {
        Self {
            table,
            text_width_px,
            line_height,
        }
    }

    /// Measurer for the bio block of a card whose base width unit is `card_width_px`.
    pub fn for_card(card_width_px: f32) -> Self {
        Self::new(
            &HELVETICA,
            card_width_px * CARD_TEXT_WIDTH_RATIO,
            BIO_LINE_HEIGHT,
        )
    }
}

impl TextMeasurer for MetricMeasurer {
    fn measure(&self, text: &str, font_px: f32) -> f32 {
        if font_px <= 0.0 {
            return 0.0;
        }
        let max_width_em = self.text_width_px / font_px;
        let lines = self.table.wrapped_lines(text, max_width_em);
        lines as f32 * font_px * self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_ascii() {
        // "Hi" = H (0.722) + i (0.222)
        let w = HELVETICA.measure_str("Hi");
        assert!((w - 0.944).abs() < 1e-4);
    }

    #[test]
    fn test_measure_str_non_ascii_uses_average() {
        let w = HELVETICA.measure_str("é");
        assert!((w - HELVETICA.average_char_width).abs() < 1e-6);
    }

    #[test]
    fn test_wrapped_lines_empty_is_zero() {
        assert_eq!(HELVETICA.wrapped_lines("", 20.0), 0);
        assert_eq!(HELVETICA.wrapped_lines("   ", 20.0), 0);
    }

    #[test]
    fn test_wrapped_lines_grows_with_text() {
        let short = HELVETICA.wrapped_lines("Potier à Dieulefit", 20.0);
        let long = HELVETICA.wrapped_lines(&"tournage émaillage cuisson ".repeat(20), 20.0);
        assert_eq!(short, 1);
        assert!(long > 5, "expected many lines, got {long}");
    }

    #[test]
    fn test_overlong_word_takes_one_line() {
        assert_eq!(HELVETICA.wrapped_lines(&"m".repeat(200), 5.0), 1);
    }

    #[test]
    fn test_height_increases_with_font_size() {
        let measurer = MetricMeasurer::for_card(260.0);
        let bio = "Ébéniste installée dans la Drôme, elle restaure des meubles anciens \
                   et dessine des pièces contemporaines en noyer et en chêne massif.";
        let small = measurer.measure(bio, 11.0);
        let large = measurer.measure(bio, 14.0);
        assert!(large > small, "small={small}, large={large}");
    }

    #[test]
    fn test_empty_text_has_zero_height() {
        let measurer = MetricMeasurer::for_card(260.0);
        assert_eq!(measurer.measure("", 12.0), 0.0);
        assert_eq!(measurer.measure("texte", 0.0), 0.0);
    }
}
