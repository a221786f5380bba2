//! Central-panel views: provider cards, the status legend and the
//! per-provider calendar window.

pub mod calendar_window;
pub mod legend;
pub(crate) mod palette;
pub mod slot_card;

pub use calendar_window::render_calendar_window;
pub use legend::render_legend;
pub use slot_card::render_provider_card;
