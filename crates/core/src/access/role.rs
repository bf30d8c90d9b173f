//! Membership roles on an investment account.

use serde::{Deserialize, Serialize};

/// A user's role on a single account.
///
/// Roles are a closed set and deliberately NOT hierarchical: each value
/// grants a fixed capability set. `Crud` is not derived from `Post` plus
/// `View`; the three are independent grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// Read-only access to the account's transactions.
    View,
    /// Full create/read/update/delete access.
    Crud,
    /// Can record transactions but not read them back.
    Post,
}

impl AccountRole {
    /// Returns true if this role can list and retrieve transactions.
    #[must_use]
    pub const fn can_read(self) -> bool {
        matches!(self, Self::View | Self::Crud)
    }

    /// Returns true if this role can record new transactions.
    #[must_use]
    pub const fn can_create(self) -> bool {
        matches!(self, Self::Crud | Self::Post)
    }

    /// Returns true if this role can update or delete transactions.
    #[must_use]
    pub const fn can_mutate(self) -> bool {
        matches!(self, Self::Crud)
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::View => write!(f, "view"),
            Self::Crud => write!(f, "crud"),
            Self::Post => write!(f, "post"),
        }
    }
}

impl std::str::FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "crud" => Ok(Self::Crud),
            "post" => Ok(Self::Post),
            _ => Err(format!("Unknown role: {s}")),
        }
    }
}
