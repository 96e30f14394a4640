use std::fmt;

/// Where a message was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Path relative to the invocation root, `/` separated.
    pub path: String,
    /// 1-based line number.
    pub line: usize,
}

impl SourceLocation {
    pub fn new(path: impl Into<String>, line: usize) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// One extracted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical double-quoted literal, quotes included.
    pub text: String,
    pub location: SourceLocation,
}

/// All entries found on a single source line.
///
/// Groups are the unit of transfer between file runs and the serializer, so
/// the entries of one line always reach the output together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGroup {
    pub location: SourceLocation,
    pub texts: Vec<String>,
}

impl EntryGroup {
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry> + '_ {
        self.texts.iter().map(|text| CatalogEntry {
            text: text.clone(),
            location: self.location.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
