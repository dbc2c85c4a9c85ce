use turtleki_domain::shared::DomainError;

/// Maps sqlx errors into `DomainError::Repository` with a short
/// operation context, e.g. `"Save player"`.
pub trait ResultExt<T> {
    fn map_repo_error(self, context: &str) -> Result<T, DomainError>;
}

impl<T> ResultExt<T> for Result<T, sqlx::Error> {
    fn map_repo_error(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Repository(format!("{}: {}", context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_prefixed() {
        let result: Result<(), sqlx::Error> = Err(sqlx::Error::PoolClosed);
        let err = result.map_repo_error("Save player").unwrap_err();
        match err {
            DomainError::Repository(msg) => assert!(msg.starts_with("Save player: ")),
            other => panic!("expected Repository error, got {:?}", other),
        }
    }
}
