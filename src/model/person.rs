//! People named in the proceedings.

use serde::Serialize;
use std::fmt;

/// A member of parliament.
///
/// Plain data; the extractor never creates these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    /// Family name
    pub last_name: String,

    /// Initial(s)
    pub initial_name: String,

    /// Electorate represented
    pub electorate: String,

    /// Party affiliation
    pub party: String,

    /// Honorifics, e.g. "Hon."
    pub titles: Vec<String>,

    /// Offices held, e.g. "Minister for Health"
    pub roles: Vec<String>,
}

impl Person {
    /// Create a person with no titles or roles.
    pub fn new(
        last_name: impl Into<String>,
        initial_name: impl Into<String>,
        electorate: impl Into<String>,
        party: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            initial_name: initial_name.into(),
            electorate: electorate.into(),
            party: party.into(),
            titles: Vec::new(),
            roles: Vec::new(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for title in &self.titles {
            write!(f, "{} ", title)?;
        }
        write!(
            f,
            "{} {} ({}, {})",
            self.initial_name, self.last_name, self.electorate, self.party
        )
    }
}
