use std::fmt;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

impl Item {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Item {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Status word used in processing results.
    pub fn status(&self) -> &'static str {
        if self.completed {
            "completed"
        } else {
            "pending"
        }
    }

    pub fn marker(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  [{}] {}", self.marker(), self.text)
    }
}
