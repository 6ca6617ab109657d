mod error_screen;
mod loading_screen;
mod page;
mod result_screen;
mod upload_panel;

pub use error_screen::ErrorScreen;
pub use loading_screen::LoadingScreen;
pub use page::HouseVideoPage;
pub use result_screen::ResultScreen;
pub use upload_panel::UploadPanel;
