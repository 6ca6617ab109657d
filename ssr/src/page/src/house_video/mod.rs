pub mod components;
pub mod provider;
pub mod server;

pub use components::HouseVideoPage;
