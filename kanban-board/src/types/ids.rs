//! Identifier newtypes for tasks and columns.
//!
//! Ids are opaque strings (`"task-1"`, `"column-1700000000000"`). They are
//! immutable once created and serialize as plain JSON strings.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing string id
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a task card
    TaskId
);

string_id!(
    /// Identifier of a column
    ColumnId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_id_display_and_compare() {
        let id = TaskId::from_string("task-1");
        assert_eq!(id.to_string(), "task-1");
        assert_eq!(id, "task-1");
        assert_eq!(id.as_str(), "task-1");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ColumnId::from("column-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"column-1\"");
        let parsed: ColumnId = serde_json::from_str("\"column-2\"").unwrap();
        assert_eq!(parsed, "column-2");
    }

    #[test]
    fn test_map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(TaskId::from("task-1"), 1);
        assert_eq!(map.get("task-1"), Some(&1));
    }
}
