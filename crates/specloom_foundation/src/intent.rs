//! The closed catalog of sentence intents.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coarse purpose of a sentence.
///
/// A sentence maps to at most one intent. Like [`Entity`](crate::Entity),
/// the catalog is closed and each member carries a stable dictionary name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intent {
    /// A test step: an action performed on the application under test.
    TestCase,
    /// A UI element property assignment.
    Ui,
    /// A property assignment inside a UI item query.
    UiItemQuery,
    /// A database connection property assignment.
    Database,
}

impl Intent {
    /// All intents, in declaration order.
    pub const ALL: [Intent; 4] = [
        Intent::TestCase,
        Intent::Ui,
        Intent::UiItemQuery,
        Intent::Database,
    ];

    /// Returns the stable dictionary name for this intent.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TestCase => "testcase",
            Self::Ui => "ui",
            Self::UiItemQuery => "ui_item_query",
            Self::Database => "database",
        }
    }

    /// Looks up an intent by its stable dictionary name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.name() == name)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
