use bson::{Bson, Document, doc};
use futures::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::results::{DeleteResult, UpdateResult};
use mongodb::{Client, Collection, Database, IndexModel};
use serde::de::DeserializeOwned;
use tracing::debug;

use bookstore_query::Query;

use crate::config::RunnerConfig;
use crate::error::RunnerError;

/// The configured collection of one connected client.
pub struct BookStore {
    database: Database,
    books: Collection<Document>,
}

impl BookStore {
    pub fn new(client: &Client, config: &RunnerConfig) -> Self {
        let database = client.database(&config.database);
        let books = database.collection(&config.collection);
        Self { database, books }
    }

    pub fn collection_name(&self) -> &str {
        self.books.name()
    }

    // ── Reads ───────────────────────────────────────────────────

    pub async fn find(&self, query: &Query) -> Result<Vec<Document>, RunnerError> {
        debug!(filter = %query.filter, skip = ?query.skip, limit = ?query.limit, "find");
        let options = FindOptions::builder()
            .sort(query.sort_document())
            .projection(query.projection.clone())
            .skip(query.skip)
            .limit(query.limit)
            .build();
        let cursor = self
            .books
            .find(query.filter.clone())
            .with_options(options)
            .await?;
        Ok(cursor.try_collect::<Vec<Document>>().await?)
    }

    pub async fn count(&self, filter: Document) -> Result<u64, RunnerError> {
        Ok(self.books.count_documents(filter).await?)
    }

    // ── Writes ──────────────────────────────────────────────────

    /// Applies `update` to the first document matching `filter`. No match is
    /// not an error; the result then reports zero modified documents.
    pub async fn update_one(
        &self,
        filter: Document,
        update: Document,
    ) -> Result<UpdateResult, RunnerError> {
        debug!(%filter, %update, "update_one");
        Ok(self.books.update_one(filter, update).await?)
    }

    pub async fn delete_one(&self, filter: Document) -> Result<DeleteResult, RunnerError> {
        debug!(%filter, "delete_one");
        Ok(self.books.delete_one(filter).await?)
    }

    // ── Aggregation ─────────────────────────────────────────────

    pub async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>, RunnerError> {
        debug!(stages = pipeline.len(), "aggregate");
        let cursor = self.books.aggregate(pipeline).await?;
        Ok(cursor.try_collect::<Vec<Document>>().await?)
    }

    pub async fn aggregate_as<T: DeserializeOwned>(
        &self,
        pipeline: Vec<Document>,
    ) -> Result<Vec<T>, RunnerError> {
        self.aggregate(pipeline)
            .await?
            .into_iter()
            .map(|doc| bson::from_document(doc).map_err(RunnerError::from))
            .collect()
    }

    // ── Indexes ─────────────────────────────────────────────────

    /// Returns the index name chosen by the server, e.g. `title_1`.
    pub async fn create_index(&self, keys: Document) -> Result<String, RunnerError> {
        debug!(%keys, "create_index");
        let model = IndexModel::builder().keys(keys).build();
        let result = self.books.create_index(model).await?;
        Ok(result.index_name)
    }

    /// Runs `explain` on a find with `executionStats` verbosity and returns
    /// the `executionStats` section.
    pub async fn explain_find(&self, filter: Document) -> Result<Document, RunnerError> {
        let command = doc! {
            "explain": {
                "find": self.books.name(),
                "filter": filter,
            },
            "verbosity": "executionStats",
        };
        let mut response = self.database.run_command(command).await?;
        match response.remove("executionStats") {
            Some(Bson::Document(stats)) => Ok(stats),
            _ => Err(RunnerError::MissingExecutionStats),
        }
    }
}
