use thiserror::Error;

/// Failure of a single request to the products endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with HTTP {status}")]
    Server { status: u16 },

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl SyncError {
    /// Map a response status to an error, `None` for any 2xx status
    pub fn from_status(status: u16) -> Option<Self> {
        if (200..300).contains(&status) {
            None
        } else {
            Some(Self::Server { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(SyncError::from_status(200), None);
        assert_eq!(SyncError::from_status(201), None);
        assert_eq!(
            SyncError::from_status(404),
            Some(SyncError::Server { status: 404 })
        );
        assert_eq!(
            SyncError::from_status(500),
            Some(SyncError::Server { status: 500 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SyncError::Server { status: 502 }.to_string(),
            "Server responded with HTTP 502"
        );
        assert_eq!(
            SyncError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }
}
