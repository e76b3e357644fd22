use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

/// A person record as supplied by the persistence layer. The engine only
/// reads these; it never mutates or validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    /// Display name in a secondary script (e.g. a phonetic reading).
    #[serde(default)]
    pub alt_script_name: Option<String>,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub birth_place: Option<String>,
    #[serde(default)]
    pub death_date: Option<NaiveDate>,
    #[serde(default)]
    pub death_place: Option<String>,
    #[serde(default)]
    pub deceased: bool,
}

impl Person {
    pub fn new(id: &str, given_name: &str, family_name: &str) -> Self {
        Self {
            id: id.to_string(),
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            alt_script_name: None,
            sex: Sex::Unknown,
            birth_date: None,
            birth_place: None,
            death_date: None,
            death_place: None,
            deceased: false,
        }
    }

    pub fn full_name(&self) -> String {
        let mut name = String::new();
        name.push_str(self.given_name.trim());
        let family = self.family_name.trim();
        if !name.is_empty() && !family.is_empty() {
            name.push(' ');
        }
        name.push_str(family);
        name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    /// `from` is a parent of `to`.
    Parent,
    /// Symmetric union between `from` and `to`.
    Spouse,
    /// Symmetric, informational only; builds no adjacency.
    Sibling,
}

/// A typed pairing of two person ids, owned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    pub id: String,
    pub kind: RelationshipKind,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub married_date: Option<NaiveDate>,
    #[serde(default)]
    pub married_place: Option<String>,
    #[serde(default)]
    pub divorced_date: Option<NaiveDate>,
}

impl RelationshipEdge {
    pub fn parent(id: &str, parent: &str, child: &str) -> Self {
        Self::new(id, RelationshipKind::Parent, parent, child)
    }

    pub fn spouse(id: &str, a: &str, b: &str) -> Self {
        Self::new(id, RelationshipKind::Spouse, a, b)
    }

    fn new(id: &str, kind: RelationshipKind, from: &str, to: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            from: from.to_string(),
            to: to.to_string(),
            married_date: None,
            married_place: None,
            divorced_date: None,
        }
    }
}
