use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One document of the `books` collection.
///
/// The runner itself reads raw documents and never relies on this shape; the
/// struct exists for typed reads and for seeding fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub price: f64,
    pub in_stock: bool,
}
