use std::{fmt, str::FromStr};
use thiserror::Error;

/// A parsed e-mail address.
///
/// Addresses are compared case-insensitively by normalizing
/// them to lowercase while parsing.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new_unchecked(address: String) -> Self {
        Self(address)
    }
    pub fn into_string(self) -> String {
        self.0
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid E-Mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let info = mailparse::addrparse(s.trim())
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        if !info.addr.contains('@') {
            return Err(EmailAddressParseError);
        }
        Ok(Self(info.addr.to_lowercase()))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
