//! Well-known role name constants.
//!
//! These must match the `role` claim issued by the auth service.

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_FACULTY: &str = "faculty";
pub const ROLE_ADMIN: &str = "admin";

/// Roles allowed to approve or disapprove a project.
pub const REVIEWER_ROLES: &[&str] = &[ROLE_FACULTY, ROLE_ADMIN];

/// Whether `role` may set a project's faculty validation.
pub fn can_review(role: &str) -> bool {
    REVIEWER_ROLES.contains(&role)
}
