//! Map navigation targets.
//!
//! Each map container sits in a numbered section of the page and hosts up to
//! four navigation buttons. A button click opens
//! `page/grp{group}/page{role}.html`; that path layout is shared with the
//! static site's files and must not change.
//!
//! Button roles are not inferred from button text or styling. The page
//! supplies a [`NavRoleMap`] from a stable per-button identifier to a
//! [`NavRole`], and the host looks buttons up in it.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Section classes that assign a map container to a group, in group order.
pub const SECTION_CLASSES: [&str; 4] = ["map01-section", "map02-section", "map03-section", "map04-section"];

/// Which numbered page section a map belongs to. Group 0 means "no section".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapGroup(u8);

impl MapGroup {
    /// The group used when a container is outside every known section.
    pub const NONE: Self = Self(0);

    /// Group for a 1-based section number; anything out of range maps to [`MapGroup::NONE`].
    #[must_use]
    pub fn new(number: u8) -> Self {
        if (1..=4).contains(&number) { Self(number) } else { Self::NONE }
    }

    /// Resolve the group from the first matching section class.
    ///
    /// `is_inside` answers whether the container has an ancestor carrying the
    /// given class; the first class (in group order) that matches wins.
    pub fn from_sections<F>(mut is_inside: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        SECTION_CLASSES
            .iter()
            .zip(1u8..)
            .find(|&(&class, _)| is_inside(class))
            .map_or(Self::NONE, |(_, n)| Self(n))
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for MapGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Logical role of a map navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavRole {
    A,
    B,
    C,
    D,
}

impl NavRole {
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for NavRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Page path opened by a navigation button.
#[must_use]
pub fn page_path(group: MapGroup, role: NavRole) -> String {
    format!("page/grp{group}/page{role}.html")
}

/// Button identifier → role mapping supplied by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavRoleMap {
    roles: HashMap<String, NavRole>,
}

impl NavRoleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object such as `{"nav-a": "A", "nav-b": "B"}`.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Register or replace the role for `id`.
    pub fn insert(&mut self, id: impl Into<String>, role: NavRole) {
        self.roles.insert(id.into(), role);
    }

    /// Role for a button identifier, if mapped.
    #[must_use]
    pub fn role(&self, id: &str) -> Option<NavRole> {
        self.roles.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, NavRole)> for NavRoleMap {
    fn from_iter<I: IntoIterator<Item = (S, NavRole)>>(iter: I) -> Self {
        Self { roles: iter.into_iter().map(|(id, role)| (id.into(), role)).collect() }
    }
}
