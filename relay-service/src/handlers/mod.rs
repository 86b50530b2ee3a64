pub mod chat;
pub mod health;
pub mod media;

pub use chat::text_chat;
pub use health::health_check;
pub use media::{analyze_video, audio_chat};
