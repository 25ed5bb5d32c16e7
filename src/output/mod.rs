pub mod formatter;

pub use formatter::{
    format_analysis, format_breakdown, format_prediction, format_score_bar, should_use_colors,
    wrap_text,
};
