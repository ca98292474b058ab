//! Content document storage.
//!
//! # Responsibility
//! - Hold the single content document as parsed JSON sections.
//! - Decode typed sections on demand for views and the ticker.
//! - Reconcile imported top-level keys over the current document.
//!
//! # Invariants
//! - Imported keys overwrite prior values; keys absent from the import keep
//!   their prior values.
//! - Section shape is not validated at merge time. A malformed section is
//!   reported by [`ContentStore::section`] when something tries to read it.
//! - `revision` increases on every mutation that changes at least one key.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::content::{
    ContentModel, SECTION_BLOG, SECTION_DOCS, SECTION_EXPERIMENTS, SECTION_IDEAS, SECTION_NOW,
    SECTION_OWNER, SECTION_UPDATES,
};

/// Top-level JSON object holding every content section.
pub type ContentDocument = Map<String, Value>;

/// Errors raised while encoding or decoding content sections.
#[derive(Debug)]
pub enum ContentError {
    /// A required section key is absent from the document.
    MissingSection(&'static str),
    /// A section is present but does not have the expected shape.
    MalformedSection {
        section: &'static str,
        source: serde_json::Error,
    },
    /// A typed section could not be encoded as JSON.
    Encode {
        section: &'static str,
        source: serde_json::Error,
    },
}

impl ContentError {
    /// Section the error refers to.
    pub fn section(&self) -> &'static str {
        match self {
            Self::MissingSection(section) => section,
            Self::MalformedSection { section, .. } => section,
            Self::Encode { section, .. } => section,
        }
    }
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSection(section) => write!(f, "content section `{section}` is missing"),
            Self::MalformedSection { section, source } => {
                write!(f, "content section `{section}` is malformed: {source}")
            }
            Self::Encode { section, source } => {
                write!(f, "content section `{section}` cannot be encoded: {source}")
            }
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingSection(_) => None,
            Self::MalformedSection { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}

/// Keys touched by one top-level merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Keys that already existed and were overwritten.
    pub overwritten: Vec<String>,
    /// Keys that did not exist before the merge.
    pub added: Vec<String>,
}

impl MergeReport {
    pub fn merged_keys(&self) -> usize {
        self.overwritten.len() + self.added.len()
    }
}

/// Single content document for one viewer session.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore {
    document: ContentDocument,
    revision: u64,
}

impl ContentStore {
    /// Creates a store from a typed model.
    pub fn from_model(model: &ContentModel) -> Result<Self, ContentError> {
        Ok(Self {
            document: encode_model(model)?,
            revision: 0,
        })
    }

    /// Creates a store holding the built-in default content.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_model(&ContentModel::builtin())
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the whole document with `model`.
    pub fn replace(&mut self, model: &ContentModel) -> Result<(), ContentError> {
        self.document = encode_model(model)?;
        self.revision += 1;
        Ok(())
    }

    /// Shallow-merges `incoming` top-level keys over the document.
    ///
    /// Precedence: an incoming key always wins, its value is stored as-is.
    /// Existing keys keep their position; new keys are appended.
    pub fn merge_top_level(&mut self, incoming: ContentDocument) -> MergeReport {
        let mut report = MergeReport::default();
        for (key, value) in incoming {
            if self.document.contains_key(key.as_str()) {
                report.overwritten.push(key.clone());
            } else {
                report.added.push(key.clone());
            }
            self.document.insert(key, value);
        }
        if report.merged_keys() > 0 {
            self.revision += 1;
        }
        report
    }

    /// Decodes one section into its typed shape.
    pub fn section<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, ContentError> {
        let value = self
            .document
            .get(key)
            .ok_or(ContentError::MissingSection(key))?;
        T::deserialize(value).map_err(|source| ContentError::MalformedSection {
            section: key,
            source,
        })
    }

    /// Decodes the full typed model, section by section.
    pub fn model(&self) -> Result<ContentModel, ContentError> {
        Ok(ContentModel {
            owner: self.section(SECTION_OWNER)?,
            now: self.section(SECTION_NOW)?,
            updates: self.section(SECTION_UPDATES)?,
            blog: self.section(SECTION_BLOG)?,
            ideas: self.section(SECTION_IDEAS)?,
            experiments: self.section(SECTION_EXPERIMENTS)?,
            docs: self.section(SECTION_DOCS)?,
        })
    }
}

fn encode_model(model: &ContentModel) -> Result<ContentDocument, ContentError> {
    let mut document = ContentDocument::new();
    encode_section(&mut document, SECTION_OWNER, &model.owner)?;
    encode_section(&mut document, SECTION_NOW, &model.now)?;
    encode_section(&mut document, SECTION_UPDATES, &model.updates)?;
    encode_section(&mut document, SECTION_BLOG, &model.blog)?;
    encode_section(&mut document, SECTION_IDEAS, &model.ideas)?;
    encode_section(&mut document, SECTION_EXPERIMENTS, &model.experiments)?;
    encode_section(&mut document, SECTION_DOCS, &model.docs)?;
    Ok(document)
}

fn encode_section<T: Serialize>(
    document: &mut ContentDocument,
    section: &'static str,
    value: &T,
) -> Result<(), ContentError> {
    let encoded = serde_json::to_value(value)
        .map_err(|source| ContentError::Encode { section, source })?;
    document.insert(section.to_string(), encoded);
    Ok(())
}
