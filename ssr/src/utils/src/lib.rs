pub mod time;
pub mod videogen;
#[cfg(feature = "hydrate")]
pub mod web;
