use sea_orm::DbErr;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by repositories and the session container.
///
/// Missing records and refused transitions are not errors; they are reported
/// through `Option` and [`crate::attendance_service::TransitionOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("{0}")]
    Validation(String),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}
