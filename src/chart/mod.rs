//! Chart support: value-axis scaling and terminal rendering

mod render;
mod scale;

pub use render::{render_chart, UNSCALABLE_MESSAGE, WITHOUT_INTEREST_LABEL, WITH_INTEREST_LABEL};
pub use scale::{tick_interval, AxisScale, MAX_TICKS};
