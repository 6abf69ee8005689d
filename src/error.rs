use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A flavor value (explicit or default) could not be resolved.
    InvalidConfig,
    /// An argument was malformed: not exactly one scalar value, bad codepoint
    /// text, or a span that does not fit the text.
    InvalidInput,
}

/// Errors returned by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An explicit flavor code is not one of the defined flavors.
    InvalidConfig { value: i64, valid: Vec<u8> },
    /// No flavor was given and the configured default is not a defined flavor.
    InvalidDefault { value: i64, valid: Vec<u8> },
    /// No flavor was given and no default is configured.
    NoFlavor,
    /// Malformed input, with a message naming the offending value.
    InvalidInput(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfig { .. } | Self::InvalidDefault { .. } | Self::NoFlavor => ErrorKind::InvalidConfig,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { value, valid } => {
                write!(f, "invalid regex flavor: {}. Valid flavors are: {:?}", value, valid)
            }
            Self::InvalidDefault { value, valid } => {
                write!(f, "invalid default regex flavor: {}. Valid flavors are: {:?}", value, valid)
            }
            Self::NoFlavor => write!(f, "no regex flavor provided and no default is set"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_list_valid_codes() {
        let err = Error::InvalidConfig { value: 3, valid: vec![1, 2] };
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert_eq!(err.to_string(), "invalid regex flavor: 3. Valid flavors are: [1, 2]");

        assert_eq!(Error::NoFlavor.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn input_errors_carry_message() {
        let err = Error::invalid_input("span (4, 2) has start > end");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "invalid input: span (4, 2) has start > end");
    }
}
