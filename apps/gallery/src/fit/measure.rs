/// Measurement oracle for the auto-fitter: the rendered height, in pixels, of
/// `text` laid out at `font_px`.
///
/// Rendered height depends on wrapping and glyph metrics, so the search can only
/// ask "how tall is it at this size" and never compute the answer directly.
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font_px: f32) -> f32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, f32) -> f32 + Send + Sync,
{
    fn measure(&self, text: &str, font_px: f32) -> f32 {
        self(text, font_px)
    }
}
