//! Storage-agnostic catalog logic.
//!
//! Filtering, sorting, pagination, aggregation and the in-place mutations
//! all operate on plain project values. The store only decides which lock
//! to hold while calling them.

use std::cmp::Ordering;

use projectbank_core::faculty_validation::FacultyValidation;
use projectbank_core::rating::average_rating;
use projectbank_core::search::{active_filter, contains_ignore_case, SortBy};
use projectbank_core::types::Timestamp;

use crate::models::project::{
    Project, ProjectFilter, ProjectPage, ProjectRating, ProjectStats, UpdateProject,
};

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Filter, sort and paginate `projects`.
pub fn list(projects: &[Project], filter: &ProjectFilter) -> ProjectPage {
    let mut matched = filter_projects(projects, filter);
    sort_projects(&mut matched, filter.sort_by);

    let total = matched.len();
    let page = matched
        .into_iter()
        .skip(filter.offset)
        .take(filter.limit)
        .cloned()
        .collect();

    ProjectPage {
        projects: page,
        total,
        has_more: filter.offset.saturating_add(filter.limit) < total,
    }
}

/// Apply year, department, category and search filters in that order.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    let mut matched: Vec<&Project> = projects.iter().collect();

    if let Some(year) = active_filter(filter.year.as_deref()) {
        matched.retain(|p| p.year == year);
    }

    if let Some(department) = active_filter(filter.department.as_deref()) {
        let needle = department.to_lowercase();
        matched.retain(|p| contains_ignore_case(&p.department, &needle));
    }

    if let Some(category) = active_filter(filter.category.as_deref()) {
        matched.retain(|p| p.category == category);
    }

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        matched.retain(|p| matches_search(p, &needle));
    }

    matched
}

/// True if title, description, author or any tag contains `needle_lower`.
fn matches_search(project: &Project, needle_lower: &str) -> bool {
    contains_ignore_case(&project.title, needle_lower)
        || contains_ignore_case(&project.description, needle_lower)
        || contains_ignore_case(&project.author, needle_lower)
        || project
            .tags
            .iter()
            .any(|tag| contains_ignore_case(tag, needle_lower))
}

/// Stable descending sort by the given key. Ties keep their current order.
pub fn sort_projects(projects: &mut [&Project], sort_by: SortBy) {
    let cmp: fn(&&Project, &&Project) -> Ordering = match sort_by {
        SortBy::Popular => |a, b| b.views.cmp(&a.views),
        SortBy::Rating => |a, b| b.rating.total_cmp(&a.rating),
        SortBy::Year => |a, b| b.year.cmp(&a.year),
        SortBy::Recent => |a, b| b.created_at.cmp(&a.created_at),
    };
    projects.sort_by(cmp);
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Counts by year, department and category plus total views.
pub fn compute_stats(projects: &[Project]) -> ProjectStats {
    let mut stats = ProjectStats {
        total: projects.len(),
        ..ProjectStats::default()
    };

    for project in projects {
        *stats.by_year.entry(project.year.clone()).or_default() += 1;
        *stats
            .by_department
            .entry(project.department.clone())
            .or_default() += 1;
        *stats
            .by_category
            .entry(project.category.clone())
            .or_default() += 1;
        stats.total_views += project.views;
    }

    stats
}

/// Distinct years, newest (lexicographically greatest) first.
pub fn available_years(projects: &[Project]) -> Vec<String> {
    let mut years: Vec<String> = projects.iter().map(|p| p.year.clone()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Merge the supplied fields onto `project`. Absent fields are untouched.
pub fn apply_update(project: &mut Project, input: &UpdateProject, now: Timestamp) {
    fn set(target: &mut String, value: &Option<String>) {
        if let Some(v) = value {
            target.clone_from(v);
        }
    }
    fn set_opt(target: &mut Option<String>, value: &Option<String>) {
        if value.is_some() {
            target.clone_from(value);
        }
    }

    set(&mut project.title, &input.title);
    set(&mut project.description, &input.description);
    set(&mut project.department, &input.department);
    set(&mut project.year, &input.year);
    set(&mut project.category, &input.category);
    set(&mut project.level, &input.level);
    if let Some(tags) = &input.tags {
        project.tags.clone_from(tags);
    }
    set_opt(&mut project.features, &input.features);
    set_opt(&mut project.supervisor, &input.supervisor);
    set_opt(&mut project.collaborators, &input.collaborators);
    set_opt(&mut project.github_repo, &input.github_repo);
    set_opt(&mut project.deploy_link, &input.deploy_link);
    set_opt(&mut project.github_id, &input.github_id);
    set_opt(&mut project.gmail_id, &input.gmail_id);
    project.updated_at = now;
}

/// Count one view. Returns the new total.
pub fn apply_view(project: &mut Project, now: Timestamp) -> u64 {
    project.views += 1;
    project.updated_at = now;
    project.views
}

/// Record or replace `rater`'s vote and recompute the average.
///
/// Returns the new average rating.
pub fn apply_rating(project: &mut Project, rater: &str, value: i64, now: Timestamp) -> f64 {
    match project.ratings.iter_mut().find(|r| r.user_id == rater) {
        Some(existing) => existing.rating = value,
        None => project.ratings.push(ProjectRating {
            user_id: rater.to_string(),
            rating: value,
        }),
    }
    project.rating = average_rating(project.ratings.iter().map(|r| r.rating));
    project.updated_at = now;
    project.rating
}

/// Set the review status and comments. Previous values are discarded.
pub fn apply_faculty_validation(
    project: &mut Project,
    status: FacultyValidation,
    comments: Option<String>,
    now: Timestamp,
) {
    project.faculty_validation = status;
    project.faculty_comments = comments;
    project.updated_at = now;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
