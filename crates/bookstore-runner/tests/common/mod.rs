#![allow(dead_code)]

use bookstore_query::Book;
use bookstore_runner::{BookStore, RunnerConfig};
use bson::oid::ObjectId;
use mongodb::Client;

/// Integration tests run only when this variable points at a MongoDB server.
pub const TEST_URI_VAR: &str = "BOOKSTORE_TEST_MONGO_URI";
pub const COLLECTION: &str = "books";

pub struct Fixture {
    pub client: Client,
    pub config: RunnerConfig,
    pub store: BookStore,
}

impl Fixture {
    pub async fn teardown(self) {
        let Fixture { client, config, store } = self;
        drop(store);
        client.database(&config.database).drop().await.unwrap();
        client.shutdown().await;
    }
}

/// Seeds a freshly named database with [`books`]. Returns `None` when no test
/// server is configured.
pub async fn fixture() -> Option<Fixture> {
    let Ok(uri) = std::env::var(TEST_URI_VAR) else {
        eprintln!("{TEST_URI_VAR} not set, skipping");
        return None;
    };
    let config = RunnerConfig {
        uri,
        database: format!("bookstore_test_{}", ObjectId::new().to_hex()),
        collection: COLLECTION.to_string(),
    };
    let client = Client::with_uri_str(&config.uri).await.unwrap();
    seed_data(&client, &config).await;
    let store = BookStore::new(&client, &config);
    Some(Fixture {
        client,
        config,
        store,
    })
}

async fn seed_data(client: &Client, config: &RunnerConfig) {
    let docs: Vec<bson::Document> = books()
        .iter()
        .map(|book| bson::to_document(book).unwrap())
        .collect();
    client
        .database(&config.database)
        .collection::<bson::Document>(&config.collection)
        .insert_many(docs)
        .await
        .unwrap();
}

fn book(title: &str, author: &str, genre: &str, published_year: i32, price: f64, in_stock: bool) -> Book {
    Book {
        id: None,
        title: title.into(),
        author: author.into(),
        genre: genre.into(),
        published_year,
        price,
        in_stock,
    }
}

/// Twelve books with distinct prices. George Orwell has three, every other
/// author at most two.
pub fn books() -> Vec<Book> {
    vec![
        book("To Kill a Mockingbird", "Harper Lee", "Fiction", 1960, 12.99, true),
        book("1984", "George Orwell", "Dystopian", 1949, 10.99, true),
        book("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, 9.99, true),
        book("Animal Farm", "George Orwell", "Political Satire", 1945, 8.50, false),
        book("Homage to Catalonia", "George Orwell", "Memoir", 1938, 11.25, true),
        book("The Alchemist", "Paulo Coelho", "Fiction", 1988, 10.49, true),
        book("Beloved", "Toni Morrison", "Fiction", 1987, 13.50, false),
        book("The Kite Runner", "Khaled Hosseini", "Fiction", 2003, 14.25, true),
        book("Never Let Me Go", "Kazuo Ishiguro", "Science Fiction", 2005, 12.00, false),
        book("The Martian", "Andy Weir", "Science Fiction", 2011, 15.99, true),
        book("Project Hail Mary", "Andy Weir", "Science Fiction", 2021, 18.50, true),
        book("Klara and the Sun", "Kazuo Ishiguro", "Science Fiction", 2021, 16.75, false),
    ]
}

pub fn titles(docs: &[bson::Document]) -> Vec<String> {
    docs.iter()
        .map(|doc| doc.get_str("title").unwrap().to_string())
        .collect()
}
