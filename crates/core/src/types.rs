/// Catalog game identifiers as issued by the upstream provider.
pub type GameId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// User id applied when a request does not name one.
pub const ANONYMOUS_USER: &str = "anonymous";
