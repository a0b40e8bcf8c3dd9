use thiserror::Error;

use crate::radix::AcceleratorVersion;

pub type AdvisorResult<T> = Result<T, AdvisorError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("unsupported accelerator API version: {version}")]
    UnsupportedVersion { version: AcceleratorVersion },
    #[error("invalid options: {detail}")]
    InvalidOptions { detail: String },
}

#[cfg(test)]
mod tests {
    use super::AdvisorError;
    use crate::radix::AcceleratorVersion;

    #[test]
    fn messages_name_the_offending_value() {
        let err = AdvisorError::UnsupportedVersion {
            version: AcceleratorVersion::V9,
        };
        assert_eq!(err.to_string(), "unsupported accelerator API version: 9");
        let err = AdvisorError::InvalidOptions {
            detail: "n_best must be at least 1".into(),
        };
        assert!(err.to_string().starts_with("invalid options:"));
    }
}
