//! Terminal chart for viewing signal files.

mod app;
mod model;
mod theme;

pub use app::{run_chart, App};
pub use model::ChartModel;
pub use theme::Theme;
