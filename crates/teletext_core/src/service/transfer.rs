//! JSON export/import of the content document.
//!
//! # Responsibility
//! - Serialize the current document as pretty-printed UTF-8 JSON files.
//! - Parse imported JSON text and shallow-merge it over the document.
//!
//! # Invariants
//! - Export is deterministic: same document, same bytes.
//! - Import validates JSON syntax only. On a parse error the document is left
//!   untouched; there is never a partial merge.
//! - Syntactically valid payloads that are not objects merge nothing.

use log::{error, info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use crate::model::content::{OwnerProfile, SECTION_OWNER};
use crate::service::content_store::{ContentStore, MergeReport};

/// File name used when the owner domain cannot be read.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "content.json";
const EXPORT_FILE_SUFFIX: &str = "-content.json";

pub type TransferResult<T> = Result<T, TransferError>;

/// Export/import failures.
#[derive(Debug)]
pub enum TransferError {
    /// Reading or writing a content file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Imported text is not valid JSON.
    InvalidJson(serde_json::Error),
    /// The document could not be serialized.
    Encode(serde_json::Error),
}

impl Display for TransferError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "content file `{}`: {source}", path.display()),
            Self::InvalidJson(err) => write!(f, "Invalid JSON: {err}"),
            Self::Encode(err) => write!(f, "failed to encode content: {err}"),
        }
    }
}

impl Error for TransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidJson(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Payload was an object and its keys were merged.
    Merged(MergeReport),
    /// Payload was valid JSON of another kind; nothing was merged.
    NotAnObject { kind: &'static str },
}

/// Serializes the whole document as pretty-printed JSON.
pub fn export_json(store: &ContentStore) -> TransferResult<String> {
    serde_json::to_string_pretty(store.document()).map_err(TransferError::Encode)
}

/// Export file name derived from the owner domain, e.g. `gunneremre-content.json`.
pub fn export_file_name(store: &ContentStore) -> String {
    let Ok(owner) = store.section::<OwnerProfile>(SECTION_OWNER) else {
        return DEFAULT_EXPORT_FILE_NAME.to_string();
    };
    let stem: String = owner
        .domain
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    if stem.is_empty() {
        DEFAULT_EXPORT_FILE_NAME.to_string()
    } else {
        format!("{stem}{EXPORT_FILE_SUFFIX}")
    }
}

/// Writes the export file into `dir` and returns its path.
pub fn export_to_dir(store: &ContentStore, dir: &Path) -> TransferResult<PathBuf> {
    let path = dir.join(export_file_name(store));
    export_to_path(store, &path)?;
    Ok(path)
}

/// Writes the export file to `path`, replacing any existing file.
pub fn export_to_path(store: &ContentStore, path: &Path) -> TransferResult<()> {
    let text = export_json(store)?;
    if let Err(source) = std::fs::write(path, text.as_bytes()) {
        error!(
            "event=content_export module=transfer status=error error_code=write_failed path={} error={}",
            path.display(),
            source
        );
        return Err(TransferError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    info!(
        "event=content_export module=transfer status=ok bytes={} revision={} path={}",
        text.len(),
        store.revision(),
        path.display()
    );
    Ok(())
}

/// Parses `text` and shallow-merges it over the document.
pub fn import_json(store: &mut ContentStore, text: &str) -> TransferResult<ImportOutcome> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let parsed: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "event=content_import module=transfer status=error error_code=invalid_json line={} column={}",
                err.line(),
                err.column()
            );
            return Err(TransferError::InvalidJson(err));
        }
    };

    match parsed {
        Value::Object(incoming) => {
            let report = store.merge_top_level(incoming);
            info!(
                "event=content_import module=transfer status=ok overwritten={} added={} revision={}",
                report.overwritten.len(),
                report.added.len(),
                store.revision()
            );
            Ok(ImportOutcome::Merged(report))
        }
        other => {
            let kind = value_kind(&other);
            warn!(
                "event=content_import module=transfer status=ignored reason=not_an_object kind={}",
                kind
            );
            Ok(ImportOutcome::NotAnObject { kind })
        }
    }
}

/// Reads `path` as UTF-8 text and imports it.
pub fn import_file(store: &mut ContentStore, path: &Path) -> TransferResult<ImportOutcome> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        error!(
            "event=content_import module=transfer status=error error_code=read_failed path={} error={}",
            path.display(),
            source
        );
        TransferError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    import_json(store, text.as_str())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{export_file_name, export_json, import_json, ImportOutcome, TransferError};
    use crate::service::content_store::ContentStore;

    #[test]
    fn export_is_two_space_pretty_json() {
        let store = ContentStore::builtin().unwrap();
        let text = export_json(&store).unwrap();
        assert!(text.starts_with("{\n  \"owner\": {\n    \"name\""));
    }

    #[test]
    fn export_file_name_uses_lowercased_domain() {
        let store = ContentStore::builtin().unwrap();
        assert_eq!(export_file_name(&store), "gunneremre-content.json");
    }

    #[test]
    fn export_file_name_falls_back_when_owner_is_unreadable() {
        let mut store = ContentStore::builtin().unwrap();
        import_json(&mut store, r#"{"owner": 3}"#).unwrap();
        assert_eq!(export_file_name(&store), "content.json");
    }

    #[test]
    fn invalid_json_leaves_document_untouched() {
        let mut store = ContentStore::builtin().unwrap();
        let before = store.clone();

        let err = import_json(&mut store, "{\"now\": \"x\",").expect_err("truncated json");
        assert!(matches!(err, TransferError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
        assert_eq!(store, before);
    }

    #[test]
    fn non_object_payload_merges_nothing() {
        let mut store = ContentStore::builtin().unwrap();
        let before = store.clone();

        let outcome = import_json(&mut store, "[1, 2, 3]").unwrap();
        assert_eq!(outcome, ImportOutcome::NotAnObject { kind: "array" });
        assert_eq!(store, before);
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let mut store = ContentStore::builtin().unwrap();
        let outcome = import_json(&mut store, "\u{feff}{\"now\": \"bom\"}").unwrap();
        assert!(matches!(outcome, ImportOutcome::Merged(_)));
    }
}
