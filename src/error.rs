use thiserror::Error;

/// Unified error type for loading whole rule files.
///
/// Returned by [`SpawnRule::load_all()`](crate::SpawnRule::load_all) and
/// [`SpawnRule::from_file()`](crate::SpawnRule::from_file) and their
/// experience counterparts. Problems inside single rules never surface here;
/// they go to the [`ErrorSink`](crate::ErrorSink).
#[derive(Debug, Error)]
pub enum GatehouseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("rule file must contain a JSON array of rules")]
    NotAList,
}
