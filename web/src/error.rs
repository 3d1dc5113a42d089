use thiserror::Error;

/// Why the device could not provide a position.
///
/// The causes are kept apart for logging only; every variant ends the session
/// the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("location permission was denied")]
    PermissionDenied,

    #[error("position is unavailable")]
    PositionUnavailable,

    #[error("timed out waiting for a position")]
    Timeout,

    #[error("geolocation is not supported by this browser")]
    Unsupported,
}

impl LocationError {
    // W3C GeolocationPositionError codes.
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    pub fn from_code(code: u16) -> Self {
        match code {
            Self::PERMISSION_DENIED => Self::PermissionDenied,
            Self::TIMEOUT => Self::Timeout,
            _ => Self::PositionUnavailable,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("backend responded with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("location unavailable: {0}")]
    LocationUnavailable(#[from] LocationError),

    #[error("could not load nearby motels: {0}")]
    Fetch(#[from] FetchError),

    #[error("event `{event}` is not valid while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },
}

impl SessionError {
    /// Text shown to the user when the session stops on this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::LocationUnavailable(_) => {
                "We couldn't get your location. Please enable location permissions in your browser."
            }
            SessionError::Fetch(_) => "Nearby motels could not be loaded. Try reloading the page.",
            SessionError::InvalidTransition { .. } => "Something went wrong. Try reloading the page.",
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid URL in {var}: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
}
