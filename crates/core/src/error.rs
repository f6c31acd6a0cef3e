use thiserror::Error;

/// Errors raised while building addresses and sender identities.
///
/// Backend crates wrap this in their own error enums so that a failed
/// construction surfaces through a single error type per backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// The default "from" address was empty or whitespace.
    #[error("the default from address cannot be empty")]
    MissingFromAddress,

    /// The value is not a usable `local@domain` email address.
    #[error("invalid email address: '{0}'")]
    InvalidAddress(String),
}
