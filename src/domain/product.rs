use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Product categories shown in the storefront sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Milk,
    Shrikhand,
    Drinks,
    Basundi,
    Others,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Milk,
        Category::Shrikhand,
        Category::Drinks,
        Category::Basundi,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Milk => "milk",
            Self::Shrikhand => "shrikhand",
            Self::Drinks => "drinks",
            Self::Basundi => "basundi",
            Self::Others => "others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Represents a sellable product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub expiry_date: NaiveDate,
    pub images: Vec<String>,
    pub in_stock: bool,
}

/// Payload for creating a new product. The id is generated by the catalog.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub expiry_date: NaiveDate,
    pub images: Vec<String>,
    pub in_stock: bool,
}

/// Partial update applied by the admin product editor.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub ingredients: Option<Vec<String>>,
    pub expiry_date: Option<NaiveDate>,
    pub images: Option<Vec<String>>,
    pub in_stock: Option<bool>,
}

impl Product {
    /// Case-insensitive match against name and description.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}
