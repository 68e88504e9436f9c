//! Reusable components

mod doubt_preview;
mod hover_card;
mod nav;
mod xp_chart;

pub use doubt_preview::DoubtPreview;
pub use hover_card::HoverCard;
pub use nav::Nav;
pub use xp_chart::XpChart;
