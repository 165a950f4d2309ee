//! Opaque server-issued record identifiers.
//!
//! Identifiers are stable strings owned by the content API. The client never
//! parses them; the newtypes only stop a video ID being passed where a tag ID
//! is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a server-issued identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier text.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Identifier of a tag in the shared taxonomy.
    TagId
);
define_id!(
    /// Identifier of a video record.
    VideoId
);
define_id!(
    /// Identifier of an artwork record.
    ArtworkId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialise_as_bare_strings() {
        let id = TagId::new("clx1");
        assert_eq!(serde_json::to_string(&id).expect("serialise"), "\"clx1\"");
        let back: TagId = serde_json::from_str("\"clx1\"").expect("deserialise");
        assert_eq!(back, id);
    }
}
