/// Failure of a single backend operation.
#[derive(thiserror::Error, Debug)]
pub enum SyncError {
    #[error("Request to the articles backend failed")]
    Network(#[from] reqwest::Error),
    #[error("Article has no server-assigned id")]
    MissingId,
}

/// The seed dataset could not be fetched or decoded.
#[derive(thiserror::Error, Debug)]
#[error("Failed to fetch the seed dataset")]
pub struct SeedFetchError(#[source] pub reqwest::Error);

#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error(transparent)]
    Seed(#[from] SeedFetchError),
}
