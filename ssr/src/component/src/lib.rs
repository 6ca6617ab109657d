pub mod buttons;
pub mod error_banner;
pub mod progress_ring;
pub mod video_player;
