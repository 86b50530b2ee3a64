pub mod media;
pub mod persona;

pub use media::IncomingMedia;
pub use persona::PersonaContext;
