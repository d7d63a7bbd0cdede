//! Taxonomy elements: events, event properties, and user properties.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What an element describes. Matching only ever pairs elements of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Event,
    EventProperty,
    UserProperty,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::EventProperty => "event_property",
            Self::UserProperty => "user_property",
        }
    }

    pub fn all() -> &'static [ElementKind] {
        &[Self::Event, Self::EventProperty, Self::UserProperty]
    }

    /// Both property scopes count as "property" kinds.
    pub fn is_property(&self) -> bool {
        matches!(self, Self::EventProperty | Self::UserProperty)
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "event" => Some(Self::Event),
            "event_property" => Some(Self::EventProperty),
            "user_property" => Some(Self::UserProperty),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Schema status as exported by the analytics platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaStatus {
    #[default]
    Live,
    Unexpected,
    Planned,
    Blocked,
    Deleted,
}

impl SchemaStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Unexpected => "UNEXPECTED",
            Self::Planned => "PLANNED",
            Self::Blocked => "BLOCKED",
            Self::Deleted => "DELETED",
        }
    }

    /// BLOCKED and DELETED elements are not part of the audited taxonomy.
    pub fn is_filtered(&self) -> bool {
        matches!(self, Self::Blocked | Self::Deleted)
    }
}

impl fmt::Display for SchemaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One event or property definition, as produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyElement {
    pub id: String,
    pub kind: ElementKind,
    pub name: String,
    pub project_id: String,
    #[serde(default)]
    pub schema_status: SchemaStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub volume_90d: u64,
    #[serde(default)]
    pub queries_90d: u64,
    #[serde(default)]
    pub first_seen: Option<NaiveDate>,
    #[serde(default)]
    pub last_seen: Option<NaiveDate>,
    /// A few observed values, when the export carries them.
    #[serde(default)]
    pub sample_values: Vec<String>,
}

impl TaxonomyElement {
    pub fn new(
        project_id: impl Into<String>,
        kind: ElementKind,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            project_id: project_id.into(),
            schema_status: SchemaStatus::default(),
            description: None,
            category: None,
            tags: BTreeSet::new(),
            volume_90d: 0,
            queries_90d: 0,
            first_seen: None,
            last_seen: None,
            sample_values: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: SchemaStatus) -> Self {
        self.schema_status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_usage(mut self, volume_90d: u64, queries_90d: u64) -> Self {
        self.volume_90d = volume_90d;
        self.queries_90d = queries_90d;
        self
    }

    pub fn with_seen(mut self, first_seen: NaiveDate, last_seen: NaiveDate) -> Self {
        self.first_seen = Some(first_seen);
        self.last_seen = Some(last_seen);
        self
    }

    pub fn with_samples<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sample_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Owned key identifying this element in outputs.
    pub fn to_ref(&self) -> ElementRef {
        ElementRef {
            project_id: self.project_id.clone(),
            kind: self.kind,
            name: self.name.clone(),
            id: self.id.clone(),
        }
    }

    /// True when the description is missing or blank.
    pub fn missing_description(&self) -> bool {
        is_blank(self.description.as_deref())
    }

    /// True when the category is missing or blank.
    pub fn missing_category(&self) -> bool {
        is_blank(self.category.as_deref())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Owned reference to an element in match, gap, and PII outputs.
///
/// Field order gives the natural output order: project, kind, name, id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementRef {
    pub project_id: String,
    pub kind: ElementKind,
    pub name: String,
    pub id: String,
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{} ({})", self.project_id, self.kind, self.name, self.id)
    }
}
