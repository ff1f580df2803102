use bson::{Document, doc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Server-side key direction: `1` ascending, `-1` descending.
    pub fn as_i32(self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// Build a sort document, keeping key order (first key sorts first).
/// Returns `None` for an empty slice so the engine's natural order applies.
pub(crate) fn sort_document(sorts: &[Sort]) -> Option<Document> {
    if sorts.is_empty() {
        return None;
    }
    let mut doc = doc! {};
    for sort in sorts {
        doc.insert(sort.field.clone(), sort.direction.as_i32());
    }
    Some(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sort_is_none() {
        assert!(sort_document(&[]).is_none());
    }

    #[test]
    fn keeps_key_order() {
        let doc = sort_document(&[Sort::desc("price"), Sort::asc("title")]).unwrap();
        let keys: Vec<&String> = doc.keys().collect();
        assert_eq!(keys, ["price", "title"]);
        assert_eq!(doc.get_i32("price").unwrap(), -1);
        assert_eq!(doc.get_i32("title").unwrap(), 1);
    }
}
