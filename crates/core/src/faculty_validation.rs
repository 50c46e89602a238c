//! Faculty review state attached to every project.
//!
//! A project starts out `pending`. A reviewer may move it to `approved` or
//! `disapproved`, and may flip between those two, but `pending` can never be
//! set explicitly once left.

use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_DISAPPROVED: &str = "disapproved";

/// Status values a reviewer is allowed to submit.
pub const SETTABLE_STATUSES: &[&str] = &[STATUS_APPROVED, STATUS_DISAPPROVED];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacultyValidation {
    #[default]
    Pending,
    Approved,
    Disapproved,
}

impl FacultyValidation {
    pub fn as_str(self) -> &'static str {
        match self {
            FacultyValidation::Pending => STATUS_PENDING,
            FacultyValidation::Approved => STATUS_APPROVED,
            FacultyValidation::Disapproved => STATUS_DISAPPROVED,
        }
    }
}

impl std::fmt::Display for FacultyValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a reviewer-submitted status.
///
/// Only `approved` and `disapproved` are accepted; `pending` is rejected
/// along with any unknown value.
pub fn parse_review_status(status: &str) -> Result<FacultyValidation, String> {
    match status {
        STATUS_APPROVED => Ok(FacultyValidation::Approved),
        STATUS_DISAPPROVED => Ok(FacultyValidation::Disapproved),
        other => Err(format!(
            "Invalid status '{other}'. Must be one of: {}",
            SETTABLE_STATUSES.join(", ")
        )),
    }
}
