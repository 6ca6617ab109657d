//! Photo in, holiday-resort video out.
//!
//! [`UploadManager`] holds the picked image, [`Lifecycle`] is the page's
//! state machine and [`GenerationController`] drives it against any
//! [`VideoGenProvider`].

mod config;
mod controller;
mod error;
mod gemini;
mod lifecycle;
mod loading_messages;
mod provider;
mod types;
mod upload;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use gemini::VeoClient;
pub use lifecycle::*;
pub use loading_messages::*;
pub use provider::*;
pub use types::*;
pub use upload::*;

