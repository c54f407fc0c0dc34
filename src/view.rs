pub mod round;
pub mod summary;

pub use round::{render_hole_tabs, render_round_screen, render_start_screen};
pub use summary::{render_summary_html, render_summary_json, render_summary_text};
