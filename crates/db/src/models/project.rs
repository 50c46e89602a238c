//! Project entity model and DTOs.

use std::collections::BTreeMap;

use projectbank_core::faculty_validation::FacultyValidation;
use projectbank_core::search::SortBy;
use projectbank_core::types::{ProjectId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A project record as stored and returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub author: String,
    pub author_id: UserId,
    pub department: String,
    pub year: String,
    pub category: String,
    pub level: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmail_id: Option<String>,
    pub views: u64,
    /// Mean of `ratings`, one decimal place. Derived, never set directly.
    pub rating: f64,
    pub ratings: Vec<ProjectRating>,
    pub files: Vec<ProjectFile>,
    pub faculty_validation: FacultyValidation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_comments: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One rater's vote on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRating {
    pub user_id: UserId,
    pub rating: i64,
}

/// An attached file descriptor. Nothing populates these yet.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectFile {
    #[serde(rename = "type")]
    pub file_type: String,
    pub name: String,
    pub url: String,
}

/// Identity stamped onto a new project as its author.
#[derive(Debug, Clone)]
pub struct ProjectAuthor {
    pub id: UserId,
    pub name: String,
}

/// DTO for creating a new project.
///
/// Required fields are checked by the caller; missing strings deserialize
/// as empty so the check can report them together.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub year: String,
    /// Defaults to `other` if blank.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub features: Option<String>,
    pub supervisor: Option<String>,
    pub collaborators: Option<String>,
    pub github_repo: Option<String>,
    pub deploy_link: Option<String>,
    pub github_id: Option<String>,
    pub gmail_id: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// Only descriptive fields are listed; counters, ratings, review state,
/// authorship and timestamps are not writable through an update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub tags: Option<Vec<String>>,
    pub features: Option<String>,
    pub supervisor: Option<String>,
    pub collaborators: Option<String>,
    pub github_repo: Option<String>,
    pub deploy_link: Option<String>,
    pub github_id: Option<String>,
    pub gmail_id: Option<String>,
}

/// Filter, sort and page selection for a listing.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub year: Option<String>,
    pub department: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: SortBy,
    pub limit: usize,
    pub offset: usize,
}

/// One page of a filtered, sorted listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    /// Number of projects matching the filter, before pagination.
    pub total: usize,
    pub has_more: bool,
}

/// Aggregate counts over the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub by_year: BTreeMap<String, usize>,
    pub by_department: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
    pub total: usize,
    pub total_views: u64,
}
