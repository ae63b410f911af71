use serde::{Deserialize, Serialize};

/// Client identifier derived from the connection's proxy headers
///
/// Rate-window state is keyed by this value. Untraceable origins collapse
/// onto a shared fallback id and share one window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    /// Fallback for requests with no usable address header
    pub const FALLBACK: &'static str = "127.0.0.1";

    /// Create a client ID from an already-derived address string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The shared fallback identity
    pub fn fallback() -> Self {
        Self(Self::FALLBACK.to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_display() {
        let id = ClientId::new("203.0.113.7");
        assert_eq!(id.to_string(), "203.0.113.7");
        assert_eq!(id.as_str(), "203.0.113.7");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(ClientId::fallback().as_str(), "127.0.0.1");
    }
}
