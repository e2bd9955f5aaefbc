//! Business rules that sit between the HTTP handlers and the store.
//!
//! - [`normalizer`] turns untrusted JSON into canonical records.
//! - [`spreadsheet`] reads uploaded workbooks into row objects.
//! - [`importer`] runs the replace-all student import.

pub mod error;
pub mod importer;
pub mod normalizer;
pub mod spreadsheet;

pub use error::{ImportError, ValidationError};
