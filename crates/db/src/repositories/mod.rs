//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` (or an open connection) as the first argument.

pub mod favorite_repo;
pub mod game_stats_repo;
pub mod vote_repo;

pub use favorite_repo::FavoriteRepo;
pub use game_stats_repo::GameStatsRepo;
pub use vote_repo::VoteRepo;
