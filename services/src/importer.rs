//! Bulk student import.
//!
//! Linear pipeline: received → parsed → validated → replaced → reported.
//! Validation looks at the first row only. Rows after it may still lack a
//! column and are stored with a `null` in its place.
//!
//! The replace step is a `delete_all` followed by `insert_many` with nothing
//! tying them together. If the insert fails after the delete succeeded, the
//! students collection is left empty.

use crate::{ImportError, normalizer, spreadsheet};
use chrono::{DateTime, Utc};
use db::models::{ImportedStudent, Record};
use db::{DocumentStore, InsertResult};
use tracing::{error, info, warn};

/// Columns the first data row must carry. Only their presence is checked.
pub const REQUIRED_COLUMNS: [&str; 2] = ["name", "course"];

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub insert: InsertResult,
    pub removed: u64,
}

/// Runs the full import against `store`. `upload` is the raw file, if any.
pub async fn import_students(
    store: &dyn DocumentStore,
    upload: Option<&[u8]>,
    now: DateTime<Utc>,
) -> Result<ImportSummary, ImportError> {
    let students = prepare_students(upload, now)?;
    replace_students(store, &students).await
}

/// Steps up to and including validation. Touches nothing outside its arguments.
pub fn prepare_students(
    upload: Option<&[u8]>,
    now: DateTime<Utc>,
) -> Result<Vec<ImportedStudent>, ImportError> {
    let bytes = match upload {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Err(ImportError::NoFileUploaded),
    };

    let rows = spreadsheet::parse_rows(bytes)?;

    let first = rows.first().ok_or(ImportError::MissingColumns)?;
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !first.contains_key(**c)) {
        warn!(column = *missing, "first spreadsheet row failed the column check");
        return Err(ImportError::MissingColumns);
    }

    Ok(rows
        .iter()
        .map(|row| normalizer::student_row_lenient(row, now))
        .collect())
}

/// Replaces the whole students collection with `students`.
pub async fn replace_students(
    store: &dyn DocumentStore,
    students: &[ImportedStudent],
) -> Result<ImportSummary, ImportError> {
    let removed = store.delete_all(ImportedStudent::COLLECTION).await?;
    info!(removed, "cleared students collection for import");

    let documents = students.iter().map(Record::to_document).collect();
    let insert = store
        .insert_many(ImportedStudent::COLLECTION, documents)
        .await
        .inspect_err(|e| {
            error!(removed, error = %e, "student insert failed after clearing the collection");
        })?;

    info!(inserted = insert.inserted_count(), "student import finished");
    Ok(ImportSummary { insert, removed })
}
