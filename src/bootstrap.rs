use crate::client::ApiClient;
use crate::error::BootstrapError;
use crate::store::Store;
use futures_util::future;

/// How [`fetch_all`] filled the store.
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The backend already had rows; they were loaded as-is.
    Loaded { count: usize },
    /// The backend was empty: the seed dataset was submitted article by
    /// article, then the collection was fetched again.
    Seeded {
        submitted: usize,
        failed: usize,
        loaded: usize,
    },
}

/// Fills the store from the backend, seeding it first if it is empty.
///
/// Seeding submits every seed article concurrently, waits for all of them,
/// and only then re-fetches the collection. Individual submission failures
/// are logged and counted, not fatal; the collection is re-fetched exactly
/// once either way.
#[tracing::instrument(name = "Bootstrapping the article collection", skip_all)]
pub async fn fetch_all(
    client: &ApiClient,
    store: &mut Store,
) -> Result<FetchOutcome, BootstrapError> {
    let rows = client.list().await?;
    if !rows.is_empty() {
        let count = rows.len();
        store.load(rows);
        return Ok(FetchOutcome::Loaded { count });
    }

    tracing::info!("The backend holds no articles, submitting the seed dataset");

    let seed = match client.fetch_seed().await {
        Ok(seed) => seed,
        Err(e) => {
            tracing::error!("{}: {}", e, e.0);
            return Err(e.into());
        }
    };

    let submitted = seed.len();
    let mut failed = 0;
    for outcome in future::join_all(seed.iter().map(|article| client.create(article))).await {
        if let Err(e) = outcome {
            tracing::warn!("Failed to submit a seed article: {:?}", e);
            failed += 1;
        }
    }

    // One reload regardless of individual submission failures.
    let rows = client.list().await?;
    let loaded = rows.len();
    store.load(rows);

    Ok(FetchOutcome::Seeded {
        submitted,
        failed,
        loaded,
    })
}
