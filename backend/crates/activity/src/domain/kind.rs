//! Activity kinds
//!
//! Contributions and times share every behavior; only their labels and
//! mount points differ.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Contributions,
    Times,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 2] = [ActivityKind::Contributions, ActivityKind::Times];

    /// Plural label, also the URL segment
    pub fn slug(&self) -> &'static str {
        match self {
            ActivityKind::Contributions => "contributions",
            ActivityKind::Times => "times",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            ActivityKind::Contributions => "contribution",
            ActivityKind::Times => "time",
        }
    }

    /// Where the list is mounted; create/edit/delete redirect here
    pub fn list_path(&self) -> String {
        format!("/api/{}", self.slug())
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
