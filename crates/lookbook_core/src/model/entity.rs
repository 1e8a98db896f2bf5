//! Normalized directory entities.
//!
//! # Responsibility
//! - Define `Mentor`, `Founder` and `Company`, the only shapes views see.
//! - Expose a common `DirectoryEntry` view used by filtering, facets and
//!   slug lookup.
//!
//! # Invariants
//! - `slug` is always derived from the display name by `normalize::slugify`.
//! - Every optional attribute has a concrete default; no field is "missing".

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The three entity kinds, each backed by its own table and credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Mentor,
    Founder,
    Company,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Mentor, Self::Founder, Self::Company];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mentor => "mentor",
            Self::Founder => "founder",
            Self::Company => "company",
        }
    }

    /// Plural label used in user-facing messages.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Mentor => "mentors",
            Self::Founder => "founders",
            Self::Company => "companies",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookbook classification. Any other upstream value is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LookbookTag {
    Investor,
    Operator,
}

impl LookbookTag {
    /// Parses the exact upstream label. Matching is case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Investor" => Some(Self::Investor),
            "Operator" => Some(Self::Operator),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Investor => "Investor",
            Self::Operator => "Operator",
        }
    }
}

/// Read-only projection shared by every entity kind.
///
/// Filtering and facet derivation only go through this trait, so the same
/// code serves mentors, founders and companies.
pub trait DirectoryEntry {
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
    fn slug(&self) -> &str;

    /// Free-form date label, if the record carries one.
    fn date(&self) -> Option<&str> {
        None
    }

    fn expertise(&self) -> &[String] {
        &[]
    }

    fn industries(&self) -> &[String] {
        &[]
    }

    /// Returns whether `tag` appears in `expertise ∪ industries`.
    ///
    /// Exact, case-sensitive comparison.
    fn has_tag(&self, tag: &str) -> bool {
        self.expertise()
            .iter()
            .chain(self.industries())
            .any(|value| value == tag)
    }
}

/// Mentor profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Image URL or `/placeholder.svg`.
    pub headshot: String,
    /// Profile URL or `#`.
    pub linkedin_url: String,
    pub role: String,
    pub company: String,
    pub bio: String,
    pub email: String,
    pub expertise: Vec<String>,
    pub industries: Vec<String>,
    pub date: Option<String>,
    pub lookbook_tag: Vec<LookbookTag>,
}

/// Founder profile: a mentor-shaped record plus company context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Founder {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub headshot: String,
    pub linkedin_url: String,
    pub role: String,
    pub company: String,
    pub bio: String,
    pub email: String,
    pub expertise: Vec<String>,
    pub industries: Vec<String>,
    pub date: Option<String>,
    pub lookbook_label: String,
    pub lookbook_tag: Vec<LookbookTag>,
    pub phone_number: String,
    pub company_stage: String,
    pub company_description: String,
    pub funding_round: String,
    pub team_size: String,
    pub location: String,
}

/// Portfolio company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    /// Display name.
    pub company: String,
    pub slug: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "companyLinkedIn")]
    pub company_linkedin: String,
    pub logo: String,
    pub one_liner: String,
    /// Comma-separated founder display names. Not a relation.
    pub founders: String,
    pub introductions_needed: String,
    pub specific_support: String,
}

impl Company {
    /// Splits `founders` into trimmed, non-empty display names.
    pub fn founder_names(&self) -> Vec<String> {
        self.founders
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl DirectoryEntry for Mentor {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn expertise(&self) -> &[String] {
        &self.expertise
    }

    fn industries(&self) -> &[String] {
        &self.industries
    }
}

impl DirectoryEntry for Founder {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn expertise(&self) -> &[String] {
        &self.expertise
    }

    fn industries(&self) -> &[String] {
        &self.industries
    }
}

impl DirectoryEntry for Company {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.company
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

#[cfg(test)]
mod tests {
    use super::{Company, LookbookTag};

    fn company_with_founders(founders: &str) -> Company {
        Company {
            id: "rec1".to_string(),
            company: "Acme".to_string(),
            slug: "acme".to_string(),
            url: String::new(),
            company_linkedin: String::new(),
            logo: String::new(),
            one_liner: String::new(),
            founders: founders.to_string(),
            introductions_needed: String::new(),
            specific_support: String::new(),
        }
    }

    #[test]
    fn founder_names_are_trimmed_and_empty_entries_dropped() {
        let company = company_with_founders(" Jane Doe, ,John Smith ,");
        assert_eq!(company.founder_names(), vec!["Jane Doe", "John Smith"]);
    }

    #[test]
    fn lookbook_tag_parse_is_case_sensitive() {
        assert_eq!(LookbookTag::parse("Investor"), Some(LookbookTag::Investor));
        assert_eq!(LookbookTag::parse("investor"), None);
        assert_eq!(LookbookTag::parse("Advisor"), None);
    }
}
