use thiserror::Error;

/// Typed failure at the gateway boundary. Callers surface these through
/// the notification tray instead of swallowing them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("gateway returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Request body could not be encoded, or a response could not be
    /// decoded into the expected shape.
    #[error("payload error: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),
}
