use std::sync::Arc;

/// Persona description prepended to every text-derived prompt.
///
/// Cheap to clone; the text is shared and never mutated after startup.
#[derive(Debug, Clone)]
pub struct PersonaContext(Arc<str>);

impl PersonaContext {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonaContext {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
