use bytes::Bytes;

/// An uploaded file, held only for the duration of one request.
#[derive(Debug, Clone)]
pub struct IncomingMedia {
    /// Filename as declared by the client; empty when none was sent.
    pub filename: String,
    pub data: Bytes,
}

impl IncomingMedia {
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}
