use std::fmt;
use std::str::FromStr;

use crate::error::EmailError;

/// A sender mailbox: an email address plus an optional display name.
///
/// Construction validates that the address looks like `local@domain`, so any
/// `EmailAddress` a backend receives is safe to place in a `From` header.
///
/// # Examples
///
/// ```
/// use courier_core::EmailAddress;
///
/// let from = EmailAddress::new("noreply@example.com")
///     .unwrap()
///     .with_display_name("Example");
/// assert_eq!(from.to_string(), "Example <noreply@example.com>");
///
/// let parsed: EmailAddress = "Example <noreply@example.com>".parse().unwrap();
/// assert_eq!(parsed, from);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    address: String,
    display_name: Option<String>,
}

impl EmailAddress {
    /// Create a new address with no display name.
    ///
    /// Surrounding whitespace is trimmed before validation.
    pub fn new(address: impl Into<String>) -> Result<Self, EmailError> {
        let address = address.into();
        let trimmed = address.trim();
        if !is_plausible_address(trimmed) {
            return Err(EmailError::InvalidAddress(address));
        }
        Ok(Self {
            address: trimmed.to_owned(),
            display_name: None,
        })
    }

    /// Build an address from parts that have already been validated.
    pub(crate) fn from_validated(address: String, display_name: Option<String>) -> Self {
        Self {
            address,
            display_name,
        }
    }

    /// Attach a display name. A blank name clears it.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = normalize_display_name(name.into());
        self
    }

    /// The bare `local@domain` address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The display name, if one was set.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// The domain part of the address.
    pub fn domain(&self) -> &str {
        self.address
            .rsplit_once('@')
            .map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{name} <{}>", self.address),
            None => f.write_str(&self.address),
        }
    }
}

impl FromStr for EmailAddress {
    type Err = EmailError;

    /// Parse either a bare address or the `Name <address>` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(open) = s.find('<') else {
            return Self::new(s);
        };
        let Some(inner) = s[open + 1..].strip_suffix('>') else {
            return Err(EmailError::InvalidAddress(s.to_owned()));
        };

        let name = s[..open].trim().trim_matches('"');
        let address = Self::new(inner)?;
        Ok(address.with_display_name(name))
    }
}

pub(crate) fn normalize_display_name(name: String) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == name.len() {
        Some(name)
    } else {
        Some(trimmed.to_owned())
    }
}

pub(crate) fn is_plausible_address(address: &str) -> bool {
    if address.chars().any(|c| c.is_whitespace() || c == '<' || c == '>') {
        return false;
    }
    match address.rsplit_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !local.contains('@'),
        None => false,
    }
}
