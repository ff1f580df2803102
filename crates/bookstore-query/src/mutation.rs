use bson::{Document, doc};

/// `$set` of the `price` field, leaving every other field untouched.
pub fn set_price(price: f64) -> Document {
    doc! { "$set": { "price": price } }
}
