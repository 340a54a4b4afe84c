use std::fmt;

/// Identifies a parameterized read: a root segment (the key family) plus the
/// filter values that shaped the result. Keys with the same segments share
/// one cache entry and one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    segments: Vec<String>,
}

impl QueryKey {
    pub fn new(root: &str) -> Self {
        Self {
            segments: vec![root.to_string()],
        }
    }

    pub fn with(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Prefix match over whole segments: `events:Seminar` matches the prefix
    /// `events` but not `event`.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self
                .segments
                .iter()
                .zip(&prefix.segments)
                .all(|(a, b)| a == b)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(":"))
    }
}

/// Entity families the cache knows how to invalidate as a group. Read keys
/// are derived from entity type + filter, so a mutation of one entity type
/// can fan out to every dependent key family without call sites having to
/// enumerate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Events,
    Activities,
    Users,
    Campaigns,
    Registrations,
}

impl EntityKind {
    /// Key families stale after a mutation of this kind. Registrations touch
    /// the parent event's counter, so they fan out like event mutations.
    pub fn dependent_prefixes(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Events => &[
                "events",
                "event",
                "upcoming-events",
                "recent-events",
                "public-events",
                "events-report",
                "dashboard-stats",
            ],
            EntityKind::Registrations => &[
                "events",
                "event",
                "upcoming-events",
                "recent-events",
                "public-events",
                "events-report",
                "dashboard-stats",
            ],
            EntityKind::Activities => &["activities"],
            EntityKind::Users => &["users"],
            EntityKind::Campaigns => &["newsletter-campaigns", "newsletter-stats"],
        }
    }
}
