use crate::models::ValidationError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ValidationError::UnknownVariant {
                        field: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(ClaimStatus {
    Active => "active",
    Accepted => "accepted",
    Rejected => "rejected",
});

impl ClaimStatus {
    /// Accepted and rejected claims admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

impl Gender {
    /// Parse accepting any casing ("Male", "FEMALE", ...).
    pub fn parse_insensitive(s: &str) -> Result<Self, ValidationError> {
        s.to_lowercase().parse()
    }
}
