//! Phrase payloads from the host page.
//!
//! Two shapes arrive in practice: records from the HTTP endpoint
//! (`[{"text": .., "date": .., "id": ..}]`) and plain strings injected into
//! the page (`["..", ".."]`). Both parse into the same `Phrase`.

use std::borrow::Cow;
use serde::{Deserialize, Serialize};

/// Identifier attached to a phrase by the backend (number or string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhraseId {
    Number(i64),
    Text(String),
}

/// Immutable phrase metadata, kept for interaction lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    pub text: String,
    pub date: Option<String>,
    pub id: Option<PhraseId>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PhraseRecord {
    Plain(String),
    Detailed {
        text: String,
        #[serde(default)]
        date: Option<String>,
        #[serde(default)]
        id: Option<PhraseId>,
    },
}

impl From<PhraseRecord> for Phrase {
    fn from(record: PhraseRecord) -> Self {
        match record {
            PhraseRecord::Plain(text) => Phrase::plain(text),
            PhraseRecord::Detailed { text, date, id } => Phrase { text, date, id },
        }
    }
}

impl Phrase {
    /// A phrase with no date or id.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            date: None,
            id: None,
        }
    }

    /// Text shown on the orbiting label. With `max_chars`, longer text is
    /// cut to that many characters followed by "...".
    pub fn label(&self, max_chars: Option<usize>) -> Cow<'_, str> {
        match max_chars {
            Some(max) if self.text.chars().count() > max => {
                let mut cut: String = self.text.chars().take(max).collect();
                cut.push_str("...");
                Cow::Owned(cut)
            }
            _ => Cow::Borrowed(&self.text),
        }
    }

    /// Serialize for the host's detail overlay.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Parse an ordered phrase list. `null` and blank input mean "no phrases".
pub fn parse_phrases(json: &str) -> Result<Vec<Phrase>, serde_json::Error> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Option<Vec<PhraseRecord>> = serde_json::from_str(json)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(Phrase::from)
        .collect())
}
