// Bio auto-fit: measurement oracle, headless font-metric measurer, the bounded
// font-size search, and the debouncer that coalesces resize-driven re-fits.

pub mod auto_fit;
pub mod debounce;
pub mod font_metrics;
pub mod handlers;
pub mod measure;

pub use auto_fit::{auto_fit, fit_block, FitBounds, FitOutcome, FitTarget};
pub use debounce::Debouncer;
pub use font_metrics::MetricMeasurer;
pub use measure::TextMeasurer;
