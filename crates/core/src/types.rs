/// Project identifiers are opaque strings assigned at creation.
pub type ProjectId = String;

/// User identifiers come from the `sub` claim of the caller's token.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
