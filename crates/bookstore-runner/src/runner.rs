use std::io::Write;

use bson::{Bson, doc};
use tracing::debug;

use bookstore_query::{
    AuthorCount, DecadeCount, GenrePriceSummary, Page, Query, Sort, filter, mutation, pipeline,
};

use crate::error::RunnerError;
use crate::report::Report;
use crate::store::BookStore;

const FICTION: &str = "Fiction";
const ORWELL: &str = "George Orwell";
const REPRICED_TITLE: &str = "The Great Gatsby";
const REPRICED_PRICE: f64 = 11.99;
const DELETED_TITLE: &str = "Animal Farm";
const SECOND_PAGE: Page = Page { number: 2, size: 5 };
pub(crate) const TOP_AUTHOR_LIMIT: i64 = 1;

/// Executes the fixed sequence of bookstore operations, printing each result.
///
/// The first failing operation aborts the rest of the sequence.
pub struct Runner<'a, W: Write> {
    store: &'a BookStore,
    report: Report<W>,
}

impl<'a, W: Write> Runner<'a, W> {
    pub fn new(store: &'a BookStore, out: W) -> Self {
        Self {
            store,
            report: Report::new(out),
        }
    }

    pub fn into_output(self) -> W {
        self.report.into_inner()
    }

    pub async fn run(&mut self) -> Result<(), RunnerError> {
        self.basic_operations().await?;
        self.advanced_queries().await?;
        self.aggregations().await?;
        self.indexes().await?;
        Ok(())
    }

    async fn basic_operations(&mut self) -> Result<(), RunnerError> {
        debug!("basic operations");
        self.report.heading("Fiction books:")?;
        let docs = self.store.find(&Query::filter(filter::by_genre(FICTION))).await?;
        self.report.documents(&docs)?;

        self.find_section(
            "Books published after 1950:",
            Query::filter(filter::published_after(1950)),
        )
        .await?;
        self.find_section(
            &format!("Books by {ORWELL}:"),
            Query::filter(filter::by_author(ORWELL)),
        )
        .await?;

        let updated = self
            .store
            .update_one(filter::by_title(REPRICED_TITLE), mutation::set_price(REPRICED_PRICE))
            .await?;
        self.report.section(&format!(
            "Updated {REPRICED_TITLE} price. Modified count: {}",
            updated.modified_count
        ))?;

        let deleted = self.store.delete_one(filter::by_title(DELETED_TITLE)).await?;
        self.report.section(&format!(
            "Deleted {DELETED_TITLE}. Deleted count: {}",
            deleted.deleted_count
        ))?;
        Ok(())
    }

    async fn advanced_queries(&mut self) -> Result<(), RunnerError> {
        debug!("advanced queries");
        self.find_section(
            "1. Books in stock and published after 2010:",
            Query::filter(filter::in_stock_published_after(2010)),
        )
        .await?;
        self.find_section(
            "2. Projection (title, author, price only):",
            Query {
                projection: Some(Query::fields_projection(&["title", "author", "price"])),
                ..Query::default()
            },
        )
        .await?;
        self.find_section(
            "3. Sorting by price ascending:",
            Query {
                sort: vec![Sort::asc("price")],
                ..Query::default()
            },
        )
        .await?;
        self.find_section(
            "4. Sorting by price descending:",
            Query {
                sort: vec![Sort::desc("price")],
                ..Query::default()
            },
        )
        .await?;
        self.find_section(
            &format!(
                "5. Pagination (page {}, {} books per page):",
                SECOND_PAGE.number, SECOND_PAGE.size
            ),
            Query::page(filter::all(), SECOND_PAGE),
        )
        .await
    }

    async fn aggregations(&mut self) -> Result<(), RunnerError> {
        debug!("aggregations");
        self.report.section("1. Average price of books by genre:")?;
        let genres: Vec<GenrePriceSummary> =
            self.store.aggregate_as(pipeline::average_price_by_genre()).await?;
        self.report.rows(&genres)?;

        self.report.section("2. Author with the most books:")?;
        let authors: Vec<AuthorCount> = self
            .store
            .aggregate_as(pipeline::top_authors(TOP_AUTHOR_LIMIT))
            .await?;
        self.report.rows(&authors)?;

        self.report.section("3. Books grouped by publication decade:")?;
        let decades: Vec<DecadeCount> =
            self.store.aggregate_as(pipeline::books_by_decade()).await?;
        self.report.rows(&decades)?;
        Ok(())
    }

    async fn indexes(&mut self) -> Result<(), RunnerError> {
        debug!("indexes");
        let title_index = self.store.create_index(doc! { "title": 1 }).await?;
        self.report
            .section(&format!("Index created on 'title': {title_index}"))?;

        let compound_index = self
            .store
            .create_index(doc! { "author": 1, "published_year": 1 })
            .await?;
        self.report.line(format!(
            "Compound index created on 'author' and 'published_year': {compound_index}"
        ))?;

        self.report.section("Query performance with explain():")?;
        let stats = self
            .store
            .explain_find(filter::by_title(REPRICED_TITLE))
            .await?;
        let json = serde_json::to_string_pretty(&Bson::Document(stats).into_relaxed_extjson())?;
        self.report.line(json)?;
        Ok(())
    }

    async fn find_section(&mut self, label: &str, query: Query) -> Result<(), RunnerError> {
        self.report.section(label)?;
        let docs = self.store.find(&query).await?;
        self.report.documents(&docs)?;
        Ok(())
    }
}
