//! Catalog serialization.
//!
//! Renders extracted line groups as a gettext template:
//!
//! ```text
//! #, fuzzy
//! msgid ""
//! msgstr ""
//! "Content-Type: text/plain; charset=UTF-8\n"
//!
//! #: src/app.js:3
//! msgid "Save"
//! msgstr "Save"
//! ```

use std::fmt::Write as _;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::core::entry::EntryGroup;
use crate::error::{ExtractError, Result};

/// Header emitted once per extraction root.
pub const HEADER: &str = concat!(
    "#, fuzzy\n",
    "msgid \"\"\n",
    "msgstr \"\"\n",
    "\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
);

/// Render one line group: a single `#:` comment for the line, then one
/// `msgid`/`msgstr` block per entry, each preceded by a blank line.
pub fn format_group(group: &EntryGroup) -> String {
    let mut out = String::new();

    for (i, entry) in group.entries().enumerate() {
        out.push('\n');
        if i == 0 {
            let _ = writeln!(out, "#: {}", entry.location);
        }
        let _ = writeln!(out, "msgid {}", entry.text);
        let _ = writeln!(out, "msgstr {}", entry.text);
    }

    out
}

/// Streams a catalog into an async writer.
pub struct CatalogWriter<W> {
    writer: W,
    entry_count: usize,
}

impl<W: AsyncWrite + Unpin> CatalogWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entry_count: 0,
        }
    }

    pub async fn write_header(&mut self) -> Result<()> {
        self.write(HEADER).await
    }

    /// Write one line group. An empty group writes nothing.
    pub async fn write_group(&mut self, group: &EntryGroup) -> Result<()> {
        if group.is_empty() {
            return Ok(());
        }
        self.write(&format_group(group)).await?;
        self.entry_count += group.len();
        Ok(())
    }

    pub async fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .await
            .map_err(|source| ExtractError::Output { source })
    }

    /// Entries written so far.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .map_err(|source| ExtractError::Output { source })
    }
}
