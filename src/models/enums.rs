use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
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
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(DocumentType {
    Consent => "consent",
    Change => "change",
    Marketing => "marketing",
    ThirdParty => "third_party",
    Unknown => "unknown",
});

str_enum!(Severity {
    High => "high",
    Medium => "medium",
    Low => "low",
});

str_enum!(ChangeType {
    Added => "added",
    Removed => "removed",
    Modified => "modified",
});

str_enum!(TransferType {
    ThirdParty => "third_party",
    Outsourcing => "outsourcing",
    Overseas => "overseas",
    Transfer => "transfer",
});

str_enum!(ActionType {
    WithdrawConsent => "withdraw_consent",
    StopThirdParty => "stop_third_party",
    DeleteData => "delete_data",
});
