use crate::types::GameId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: GameId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
