//! Marketing site components

mod button;
mod footer;
mod header;
mod reveal;
mod switch;

pub use button::{Button, ButtonVariant};
pub use footer::Footer;
pub use header::Header;
pub use reveal::{Reveal, RevealEach};
pub use switch::Switch;
