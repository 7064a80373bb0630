pub mod favorite;
pub mod game_stats;
pub mod vote;
