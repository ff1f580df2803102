mod config;
mod error;
mod report;
mod runner;
mod store;

use std::io::Write;

use bson::{Bson, doc};
use mongodb::Client;
use tracing::info;

use bookstore_query::pipeline;

pub use config::{DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_URI, RunnerConfig};
pub use error::RunnerError;
pub use report::Report;
pub use runner::Runner;
pub use store::BookStore;

/// Connects, runs the whole sequence into `out` and closes the client,
/// whether or not the sequence succeeded.
pub async fn run<W: Write>(config: &RunnerConfig, out: &mut W) -> Result<(), RunnerError> {
    info!(
        database = %config.database,
        collection = %config.collection,
        "connecting"
    );
    let client = Client::with_uri_str(&config.uri).await?;

    let result = {
        let store = BookStore::new(&client, config);
        Runner::new(&store, out).run().await
    };

    client.shutdown().await;
    info!("client closed");
    result
}

/// The aggregation pipelines as pretty relaxed extended JSON.
pub fn pipelines_json() -> Result<String, RunnerError> {
    let pipelines = doc! {
        "average_price_by_genre": pipeline::average_price_by_genre(),
        "top_authors": pipeline::top_authors(runner::TOP_AUTHOR_LIMIT),
        "books_by_decade": pipeline::books_by_decade(),
    };
    Ok(serde_json::to_string_pretty(
        &Bson::Document(pipelines).into_relaxed_extjson(),
    )?)
}
