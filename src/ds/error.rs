use thiserror::Error;

/// Evaluation-time failures. Chains record intent without touching a value,
/// so every failure surfaces only when a chain is played.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A step required a capability the intermediate value does not provide.
    #[error("unsupported operation: {operation} on {value}")]
    UnsupportedOperation { operation: String, value: String },

    /// Neither the value nor the helper registry resolved the member.
    #[error("unknown member \"{name}\" for {value}")]
    UnknownMember { name: String, value: String },
}

/// Registration-time failures raised by registry and builder APIs.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid registration: {0}")]
    InvalidRegistration(String),

    #[error("unknown helper pack \"{0}\"")]
    UnknownPack(String),

    #[error("helper config error: {0}")]
    Config(String),
}
