//! Greeting Domain Model
//!
//! The response value returned by the greeting endpoint: a sequence number
//! and the formatted greeting text.

/// Template for greeting content. The name is substituted verbatim.
const GREETING_TEMPLATE: &str = "Hello, {name}!";

/// Default name used when the caller provides none.
pub const DEFAULT_NAME: &str = "World";

/// A numbered greeting. Created fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    id: u64,
    content: String,
}

impl Greeting {
    /// Build a greeting with the given sequence number and name.
    ///
    /// The name is substituted into the template as-is: no escaping, no
    /// trimming. Defaulting an empty name is the caller's concern.
    #[must_use]
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            content: GREETING_TEMPLATE.replace("{name}", name),
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
