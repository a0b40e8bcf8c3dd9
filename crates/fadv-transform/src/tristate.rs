#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Three-valued boolean; `Both` means the caller is indifferent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tristate {
    True,
    False,
    Both,
}

impl Tristate {
    /// `true` for `True` and `Both`.
    #[must_use]
    pub const fn is(self) -> bool {
        matches!(self, Self::True | Self::Both)
    }

    /// `true` for `False` and `Both`.
    #[must_use]
    pub const fn is_not(self) -> bool {
        matches!(self, Self::False | Self::Both)
    }

    /// Concrete values covered by this flag, `true` first.
    #[must_use]
    pub const fn values(self) -> &'static [bool] {
        match self {
            Self::True => &[true],
            Self::False => &[false],
            Self::Both => &[true, false],
        }
    }
}
