#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    User,
    Organization,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::User => "user",
            SourceKind::Organization => "organization",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One addressable feed endpoint, either an author or a publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    pub url: String,
    pub kind: SourceKind,
    pub name: Option<String>,
}

impl FeedSource {
    pub fn user(url: String) -> Self {
        Self {
            url,
            kind: SourceKind::User,
            name: None,
        }
    }

    pub fn organization(url: String, name: String) -> Self {
        Self {
            url,
            kind: SourceKind::Organization,
            name: Some(name),
        }
    }
}
