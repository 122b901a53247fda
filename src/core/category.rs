//! Subsystem category bitmask

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bitmask identifying the subsystem a log entry originates from.
///
/// Categories combine with `|` to form filter masks:
///
/// ```
/// use multi_sink_logger::Category;
///
/// let mask = Category::TERRAIN | Category::NETWORK;
/// assert!(mask.intersects(Category::NETWORK));
/// assert!(!mask.intersects(Category::SOUND));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(u32);

impl Category {
    /// Matches nothing. Only the internal shutdown sentinel carries it.
    pub const NONE: Category = Category(0);
    pub const TERRAIN: Category = Category(1 << 0);
    pub const NETWORK: Category = Category(1 << 1);
    pub const SOUND: Category = Category(1 << 2);
    pub const RENDER: Category = Category(1 << 3);
    pub const INPUT: Category = Category(1 << 4);
    pub const RESOURCE: Category = Category(1 << 5);
    /// Matches every subsystem.
    pub const ALL: Category = Category(u32::MAX);

    /// True if the two masks share at least one bit.
    #[inline]
    #[must_use]
    pub fn intersects(self, other: Category) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Fixed label for each enumerated value.
    ///
    /// Total over all `u32` patterns: combined masks and unassigned bits
    /// map to `"unknown"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::NONE => "none",
            Category::TERRAIN => "terrain",
            Category::NETWORK => "network",
            Category::SOUND => "sound",
            Category::RENDER => "render",
            Category::INPUT => "input",
            Category::RESOURCE => "resource",
            Category::ALL => "all",
            _ => "unknown",
        }
    }

    #[inline]
    #[must_use]
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for Category {
    type Output = Category;

    fn bitor(self, rhs: Category) -> Category {
        Category(self.0 | rhs.0)
    }
}

impl BitOrAssign for Category {
    fn bitor_assign(&mut self, rhs: Category) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Category {
    type Output = Category;

    fn bitand(self, rhs: Category) -> Category {
        Category(self.0 & rhs.0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
