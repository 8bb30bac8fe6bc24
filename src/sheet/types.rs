//! Id-sheet types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::validation::{check_length, FieldError, Location, ValidationErrors};

pub const FILENAME_MIN_LEN: usize = 1;
pub const FILENAME_MAX_LEN: usize = 10;

/// Request body for `POST /sheet`, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSheetRequest {
    pub filename: String,
    pub ids: Vec<i64>,
}

/// A validated sheet: positive ids, deduplicated, ascending.
///
/// The only way to get one is [`IdSheet::new`], so every value upholds that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSheet {
    filename: String,
    ids: Vec<i64>,
}

impl IdSheet {
    /// Validate and normalize. Any id <= 0 rejects the whole sheet.
    pub fn new(filename: String, ids: Vec<i64>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(check_length(
            Location::Body,
            "filename",
            &filename,
            FILENAME_MIN_LEN,
            FILENAME_MAX_LEN,
        ));

        if let Some(bad) = ids.iter().copied().find(|id| *id <= 0) {
            errors.push(
                FieldError::new(
                    Location::Body,
                    "ids",
                    "value_error",
                    "Value error, id must be greater than 0",
                )
                .with_input(bad),
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let ids: BTreeSet<i64> = ids.into_iter().collect();
        Ok(Self {
            filename,
            ids: ids.into_iter().collect(),
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }
}

impl TryFrom<CreateSheetRequest> for IdSheet {
    type Error = ValidationErrors;

    fn try_from(req: CreateSheetRequest) -> Result<Self, Self::Error> {
        IdSheet::new(req.filename, req.ids)
    }
}

/// Response body for a written sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSheetResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_and_sort() {
        let sheet = IdSheet::new("out.csv".into(), vec![3, 1, 2, 2]).unwrap();
        assert_eq!(sheet.ids(), &[1, 2, 3]);
        assert_eq!(sheet.filename(), "out.csv");
    }

    #[test]
    fn test_empty_ids_allowed() {
        let sheet = IdSheet::new("a".into(), vec![]).unwrap();
        assert!(sheet.ids().is_empty());
    }

    #[test]
    fn test_non_positive_id_rejects_sheet() {
        let errors = IdSheet::new("ids".into(), vec![0, 5]).unwrap_err();
        assert_eq!(errors.len(), 1);
        let err = errors.iter().next().unwrap();
        assert_eq!(err.field(), Some("ids"));
        assert_eq!(err.kind, "value_error");

        assert!(IdSheet::new("ids".into(), vec![4, -1]).is_err());
    }

    #[test]
    fn test_filename_length() {
        assert!(IdSheet::new("".into(), vec![1]).is_err());
        assert!(IdSheet::new("abcdefghij".into(), vec![1]).is_ok());
        assert!(IdSheet::new("abcdefghijk".into(), vec![1]).is_err());
    }

    #[test]
    fn test_reports_filename_and_ids_together() {
        let errors = IdSheet::new("".into(), vec![-3]).unwrap_err();
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
        assert_eq!(fields, vec!["filename", "ids"]);
    }
}
