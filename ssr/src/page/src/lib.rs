pub mod house_video;
