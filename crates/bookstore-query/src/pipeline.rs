//! Aggregation pipelines over the `books` collection and their result rows.

use std::fmt;

use bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};

/// Average `price` and document count per `genre`.
pub fn average_price_by_genre() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": "$genre",
            "average_price": { "$avg": "$price" },
            "count": { "$sum": 1 },
        }
    }]
}

/// The `limit` authors with the most documents, highest count first.
/// Ties are ordered by the engine.
pub fn top_authors(limit: i64) -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$author",
                "count": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "count": -1 } },
        doc! { "$limit": limit },
    ]
}

/// Document count per publication decade, ascending by decade label.
pub fn books_by_decade() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": decade_label(),
                "count": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "_id": 1 } },
    ]
}

/// `floor(published_year / 10) * 10` rendered as a string with an `s` suffix,
/// so 1987 becomes `"1980s"`.
fn decade_label() -> Bson {
    Bson::Document(doc! {
        "$concat": [
            {
                "$toString": {
                    "$multiply": [
                        { "$floor": { "$divide": ["$published_year", 10] } },
                        10
                    ]
                }
            },
            "s"
        ]
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenrePriceSummary {
    #[serde(rename = "_id")]
    pub genre: Option<String>,
    /// `None` when no document of the group has a numeric price.
    pub average_price: Option<f64>,
    pub count: i64,
}

impl fmt::Display for GenrePriceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let genre = self.genre.as_deref().unwrap_or("(no genre)");
        match self.average_price {
            Some(avg) => write!(f, "{genre}: average price {avg:.2} ({} books)", self.count),
            None => write!(f, "{genre}: average price n/a ({} books)", self.count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorCount {
    #[serde(rename = "_id")]
    pub author: Option<String>,
    pub count: i64,
}

impl fmt::Display for AuthorCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let author = self.author.as_deref().unwrap_or("(no author)");
        write!(f, "{author}: {} books", self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeCount {
    #[serde(rename = "_id")]
    pub decade: Option<String>,
    pub count: i64,
}

impl fmt::Display for DecadeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decade = self.decade.as_deref().unwrap_or("(no year)");
        write!(f, "{decade}: {} books", self.count)
    }
}
