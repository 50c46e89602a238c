//! Repository for the project collection.

use chrono::Utc;
use projectbank_core::faculty_validation::FacultyValidation;
use projectbank_core::project_fields::category_or_default;
use projectbank_core::types::ProjectId;
use uuid::Uuid;

use crate::catalog;
use crate::models::project::{
    CreateProject, Project, ProjectAuthor, ProjectFilter, ProjectPage, ProjectStats,
    UpdateProject,
};
use crate::DbPool;

/// Provides catalog operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created record.
    ///
    /// Counters start at zero and review status at `pending`. If `category`
    /// is blank in the input, defaults to `other`.
    pub async fn create(pool: &DbPool, input: &CreateProject, author: &ProjectAuthor) -> Project {
        let now = Utc::now();
        let project = Project {
            id: Uuid::now_v7().to_string(),
            title: input.title.clone(),
            description: input.description.clone(),
            author: author.name.clone(),
            author_id: author.id.clone(),
            department: input.department.clone(),
            year: input.year.clone(),
            category: category_or_default(&input.category),
            level: input.level.clone(),
            tags: input.tags.clone(),
            features: input.features.clone(),
            supervisor: input.supervisor.clone(),
            collaborators: input.collaborators.clone(),
            github_repo: input.github_repo.clone(),
            deploy_link: input.deploy_link.clone(),
            github_id: input.github_id.clone(),
            gmail_id: input.gmail_id.clone(),
            views: 0,
            rating: 0.0,
            ratings: Vec::new(),
            files: Vec::new(),
            faculty_validation: FacultyValidation::Pending,
            faculty_comments: None,
            created_at: now,
            updated_at: now,
        };

        pool.projects.write().await.push(project.clone());
        tracing::debug!(project_id = %project.id, "Project stored");
        project
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Option<Project> {
        pool.projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// List one page of projects matching `filter`.
    pub async fn list(pool: &DbPool, filter: &ProjectFilter) -> ProjectPage {
        let projects = pool.projects.read().await;
        catalog::list(&projects, filter)
    }

    /// Update a project. Only `Some` fields in `input` are applied.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn update(pool: &DbPool, id: &str, input: &UpdateProject) -> Option<Project> {
        let mut projects = pool.projects.write().await;
        let project = projects.iter_mut().find(|p| p.id == id)?;
        catalog::apply_update(project, input, Utc::now());
        Some(project.clone())
    }

    /// Increment the view counter by one, returning the new count.
    pub async fn record_view(pool: &DbPool, id: &str) -> Option<u64> {
        let mut projects = pool.projects.write().await;
        let project = projects.iter_mut().find(|p| p.id == id)?;
        Some(catalog::apply_view(project, Utc::now()))
    }

    /// Record `rater`'s vote, returning the recomputed average.
    ///
    /// The value must already be range-checked by the caller.
    pub async fn rate(pool: &DbPool, id: &str, rater: &str, value: i64) -> Option<f64> {
        let mut projects = pool.projects.write().await;
        let project = projects.iter_mut().find(|p| p.id == id)?;
        Some(catalog::apply_rating(project, rater, value, Utc::now()))
    }

    /// Set the faculty review status and comments.
    pub async fn set_faculty_validation(
        pool: &DbPool,
        id: &str,
        status: FacultyValidation,
        comments: Option<String>,
    ) -> Option<Project> {
        let mut projects = pool.projects.write().await;
        let project = projects.iter_mut().find(|p| p.id == id)?;
        catalog::apply_faculty_validation(project, status, comments, Utc::now());
        Some(project.clone())
    }

    /// Aggregate counts over every stored project.
    pub async fn stats(pool: &DbPool) -> ProjectStats {
        let projects = pool.projects.read().await;
        catalog::compute_stats(&projects)
    }

    /// Distinct academic years, newest first.
    pub async fn available_years(pool: &DbPool) -> Vec<String> {
        let projects = pool.projects.read().await;
        catalog::available_years(&projects)
    }

    /// Number of stored projects.
    pub async fn count(pool: &DbPool) -> usize {
        pool.projects.read().await.len()
    }

    /// Author id of a project, used for ownership checks.
    pub async fn find_author_id(pool: &DbPool, id: &str) -> Option<ProjectId> {
        pool.projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.author_id.clone())
    }
}
