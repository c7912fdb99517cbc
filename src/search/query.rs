//! Query text owned by the search box

/// The text currently typed into the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Query to dispatch, or `None` if the text is blank.
    ///
    /// The raw text is returned untrimmed; trimming only decides whether
    /// there is anything to search for.
    pub fn submission(&self) -> Option<String> {
        if self.text.trim().is_empty() {
            None
        } else {
            Some(self.text.clone())
        }
    }
}
