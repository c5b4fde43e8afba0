//! Immutable pull request models.
//!
//! Each model is decoded from a GitHub API response at a single boundary,
//! [`Dto::from_value`], and encodes back to the same wire shape with
//! [`Dto::to_value`]. Required fields that are missing or mistyped fail the
//! decode with [`Error::MalformedResponse`]; optional fields that are absent
//! decode to `None` and encode as `null`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Declares a string-backed enum that keeps unknown wire values.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A value not known to this crate, kept verbatim.
            Other(String),
        }

        impl $name {
            /// The wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(value) => value,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
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

mod check_run;
mod file;
mod pull_request;
mod repository;
mod review;
pub(crate) mod timestamp;
mod user;

pub use check_run::{CheckConclusion, CheckRun, CheckStatus};
pub use file::PullRequestFile;
pub use pull_request::{PullRequest, PullRequestState};
pub use repository::{Base, Head, Label, Repository};
pub use review::{Comment, Review, ReviewState};
pub use user::User;

/// A model decoded from, and encodable back to, GitHub JSON.
pub trait Dto: Serialize + DeserializeOwned {
    /// Human-readable resource name used in decode errors.
    const RESOURCE: &'static str;

    /// Decode one resource.
    ///
    /// # Errors
    /// Returns [`Error::MalformedResponse`] if a required field is missing
    /// or any field has an unexpected shape.
    fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::malformed(Self::RESOURCE, &e))
    }

    /// Decode a JSON array of resources.
    ///
    /// # Errors
    /// Returns [`Error::MalformedResponse`] if `value` is not an array or
    /// any element fails to decode.
    fn from_value_list(value: Value) -> Result<Vec<Self>> {
        serde_json::from_value(value).map_err(|e| Error::malformed(Self::RESOURCE, &e))
    }

    /// Encode back into the wire shape.
    fn to_value(&self) -> Value {
        // Plain structs with string keys always serialize.
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Decode `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;

    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
