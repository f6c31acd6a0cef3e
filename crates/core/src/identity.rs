use crate::address::{EmailAddress, is_plausible_address, normalize_display_name};
use crate::error::EmailError;

/// The default "from" identity a sender uses when the caller does not supply
/// an explicit from-address.
///
/// Every backend holds exactly one of these, built from its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultIdentity {
    from_address: String,
    display_name: Option<String>,
}

impl DefaultIdentity {
    /// Create a new identity.
    ///
    /// Fails with [`EmailError::MissingFromAddress`] when `from_address` is
    /// blank and [`EmailError::InvalidAddress`] when it is not a `local@domain`
    /// address. A blank display name is treated as absent.
    pub fn new(
        from_address: impl Into<String>,
        display_name: Option<String>,
    ) -> Result<Self, EmailError> {
        let from_address = from_address.into();
        let trimmed = from_address.trim();
        if trimmed.is_empty() {
            return Err(EmailError::MissingFromAddress);
        }
        if !is_plausible_address(trimmed) {
            return Err(EmailError::InvalidAddress(from_address));
        }
        Ok(Self {
            from_address: trimmed.to_owned(),
            display_name: display_name.and_then(normalize_display_name),
        })
    }

    /// The default from-address.
    pub fn from_address(&self) -> &str {
        &self.from_address
    }

    /// The default display name, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// The mailbox used for sends that do not override the from-address.
    pub fn mailbox(&self) -> EmailAddress {
        EmailAddress::from_validated(self.from_address.clone(), self.display_name.clone())
    }
}
