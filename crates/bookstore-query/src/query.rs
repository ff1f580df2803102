use bson::{Document, doc};

use crate::sort::{Sort, sort_document};

/// A find request: filter, ordering, projection and a skip/limit window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    pub filter: Document,
    pub sort: Vec<Sort>,
    pub projection: Option<Document>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl Query {
    pub fn filter(filter: Document) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn sort_document(&self) -> Option<Document> {
        sort_document(&self.sort)
    }

    /// Restrict the returned documents to `fields`, always excluding `_id`.
    pub fn fields_projection(fields: &[&str]) -> Document {
        let mut projection = doc! { "_id": 0 };
        for field in fields {
            projection.insert(*field, 1);
        }
        projection
    }

    pub fn page(filter: Document, page: Page) -> Self {
        Self {
            filter,
            skip: Some(page.skip()),
            limit: Some(page.limit()),
            ..Self::default()
        }
    }
}

/// 1-based page of `size` documents. Page numbers below 1 read as page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u64,
    pub size: u64,
}

impl Page {
    pub fn skip(&self) -> u64 {
        (self.number.max(1) - 1).saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page_of_five() {
        let page = Page { number: 2, size: 5 };
        assert_eq!(page.skip(), 5);
        assert_eq!(page.limit(), 5);
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let page = Page { number: 0, size: 5 };
        assert_eq!(page.skip(), 0);
    }

    #[test]
    fn page_query_keeps_filter() {
        let query = Query::page(doc! { "genre": "Fiction" }, Page { number: 3, size: 10 });
        assert_eq!(query.filter, doc! { "genre": "Fiction" });
        assert_eq!(query.skip, Some(20));
        assert_eq!(query.limit, Some(10));
        assert!(query.sort_document().is_none());
    }

    #[test]
    fn projection_excludes_id() {
        let projection = Query::fields_projection(&["title", "author", "price"]);
        assert_eq!(
            projection,
            doc! { "_id": 0, "title": 1, "author": 1, "price": 1 }
        );
    }

    #[test]
    fn sort_document_from_query() {
        let query = Query {
            sort: vec![Sort::desc("price")],
            ..Query::default()
        };
        assert_eq!(query.sort_document(), Some(doc! { "price": -1 }));
    }
}
