pub mod house_video;
#[cfg(feature = "ssr")]
pub mod server;
