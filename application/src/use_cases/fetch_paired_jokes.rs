//! Fetch Paired Jokes use case
//!
//! Orchestrates the full pairing flow: fan out parallel fetches against two
//! independent joke sources, then combine each pair through the
//! generative-text service.

use crate::ports::joke_combiner::{CombinerError, JokeCombiner};
use crate::ports::joke_source::{JokeSource, SourceError};
use futures::future::try_join_all;
use jokehub_domain::PairedJoke;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Number of pairings produced by one batch
pub const BATCH_SIZE: usize = 5;

/// Errors that can occur while assembling a batch of paired jokes
#[derive(Error, Debug)]
pub enum FetchPairedJokesError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Combiner(#[from] CombinerError),
}

/// Use case producing a batch of [`BATCH_SIZE`] paired jokes
///
/// The batch is all-or-nothing: a single failed fetch or combination fails
/// the whole invocation and no partial list is returned. Output order is
/// index-stable: the i-th result pairs the i-th joke fetched from each
/// source.
pub struct FetchPairedJokes {
    chuck_source: Arc<dyn JokeSource>,
    dad_source: Arc<dyn JokeSource>,
    combiner: Arc<dyn JokeCombiner>,
}

impl FetchPairedJokes {
    pub fn new(
        chuck_source: Arc<dyn JokeSource>,
        dad_source: Arc<dyn JokeSource>,
        combiner: Arc<dyn JokeCombiner>,
    ) -> Self {
        Self {
            chuck_source,
            dad_source,
            combiner,
        }
    }

    /// Execute one batch
    pub async fn execute(&self) -> Result<Vec<PairedJoke>, FetchPairedJokesError> {
        info!(
            "Fetching {} jokes from {} and {}",
            BATCH_SIZE,
            self.chuck_source.name(),
            self.dad_source.name()
        );

        // Fan out: BATCH_SIZE concurrent calls per source, both groups in
        // flight at once. try_join_all keeps results in fan-out order and
        // aborts the batch on the first error.
        let chuck_batch = try_join_all((0..BATCH_SIZE).map(|_| {
            let source = Arc::clone(&self.chuck_source);
            async move { source.random_joke().await }
        }));
        let dad_batch = try_join_all((0..BATCH_SIZE).map(|_| {
            let source = Arc::clone(&self.dad_source);
            async move { source.random_joke().await }
        }));

        let (chuck_jokes, dad_jokes) = futures::try_join!(chuck_batch, dad_batch)?;

        // Combine sequentially to bound load on the generative service.
        let mut paired = Vec::with_capacity(BATCH_SIZE);
        for (index, (chuck, dad)) in chuck_jokes.into_iter().zip(dad_jokes).enumerate() {
            debug!("Combining pair {}/{}", index + 1, BATCH_SIZE);
            let combined = self.combiner.combine(chuck.as_str(), dad.as_str()).await?;
            paired.push(PairedJoke::new(chuck, dad, combined));
        }

        info!("Paired jokes batch complete");
        Ok(paired)
    }
}
