//! Candidate domain model.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::book::Identity;

/// A candidate record managed by the recruiter.
///
/// Contact fields are opaque validated strings: validation happens at the
/// parsing boundary, the model stores whatever the parser accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Full name
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Postal address
    pub address: String,
    /// Free-form labels attached to this candidate
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        tags: BTreeSet<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            tags,
        }
    }
}

impl Identity for Candidate {
    const ENTITY_TYPE: &'static str = "candidate";

    /// Two candidates are the same person when they share a name and at least
    /// one contact field. This is looser than full field equality so that two
    /// records differing only in tags or address still count as duplicates.
    fn same_identity(&self, other: &Self) -> bool {
        self.name == other.name && (self.phone == other.phone || self.email == other.email)
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
            write!(f, " Tags: [{}]", tags.join(", "))?;
        }
        Ok(())
    }
}
