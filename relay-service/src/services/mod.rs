pub mod providers;
pub mod relay;

pub use relay::{AudioChatOutcome, RelayService};
