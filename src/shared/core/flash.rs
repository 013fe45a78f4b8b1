// One-shot message handed from a decision to the page that renders it.
//
// A Flash lives inside the value returned for a single request and is
// consumed when read. Nothing here is shared between requests.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    error: Option<String>,
}

impl Flash {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// Reads the error and clears it; a second call returns `None`.
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }
}
