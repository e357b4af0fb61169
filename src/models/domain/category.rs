use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: &str) -> Self {
        Category {
            id,
            kind: kind.to_string(),
        }
    }

    /// The categories the trivia front end ships with.
    pub fn defaults() -> Vec<Category> {
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category::new(id, kind))
            .collect()
    }
}

/// Which questions a quiz draws from. Category id 0 on the wire means all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Category(i64),
}

impl CategorySelector {
    pub const ALL_ID: i64 = 0;

    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            Self::ALL_ID => Some(CategorySelector::All),
            id if id > 0 => Some(CategorySelector::Category(id)),
            _ => None,
        }
    }
}
