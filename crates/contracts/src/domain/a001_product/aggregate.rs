use serde::{de, Deserialize, Deserializer, Serialize};

use crate::shared::list_query::{Collation, FieldValue, ListRow, NO_FILTER};

// ============================================================================
// ID Type
// ============================================================================

pub type ProductId = i64;

/// Next id for a new product: one above the largest id in the collection.
/// `None` once the largest id is `ProductId::MAX`.
pub fn next_product_id(products: &[Product]) -> Option<ProductId> {
    products
        .iter()
        .map(|p| p.id)
        .fold(0, ProductId::max)
        .checked_add(1)
}

// ============================================================================
// Aggregate
// ============================================================================

/// Product record as served by the products endpoint.
///
/// Only `id` is mandatory; the remaining fields may be missing from server
/// payloads and such rows sort after all others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "de_id")]
    pub id: ProductId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Numeric text; numbers in the payload are accepted and kept as text
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_price"
    )]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stocked: Option<bool>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        stocked: bool,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            category: Some(category.into()),
            price: Some(price.into()),
            stocked: Some(stocked),
        }
    }

    pub fn is_stocked(&self) -> bool {
        self.stocked.unwrap_or(false)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ProductId, D::Error> {
    match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral_id))
            .ok_or_else(|| de::Error::custom(format!("invalid product id: {n}"))),
        TextOrNumber::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid product id: {s:?}"))),
    }
}

/// Whole floats like `3.0` within the id range
fn integral_id(f: f64) -> Option<ProductId> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    let in_range = f >= ProductId::MIN as f64 && f < ProductId::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as ProductId)
}

fn de_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }),
    )
}

// ============================================================================
// Columns
// ============================================================================

/// Column accessor of the product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ProductColumn {
    #[default]
    Id,
    Name,
    Category,
    Price,
    Stocked,
}

impl ProductColumn {
    /// Columns shown in the table, in display order
    pub const DISPLAYED: [ProductColumn; 4] = [
        ProductColumn::Name,
        ProductColumn::Category,
        ProductColumn::Price,
        ProductColumn::Stocked,
    ];

    pub fn accessor(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::Stocked => "stocked",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Price => "Price",
            Self::Stocked => "Stocked",
        }
    }
}

impl ListRow for Product {
    type Column = ProductColumn;

    fn field(&self, column: ProductColumn) -> Option<FieldValue> {
        match column {
            ProductColumn::Id => Some(FieldValue::Number(self.id as f64)),
            ProductColumn::Name => self.name.clone().map(FieldValue::Text),
            ProductColumn::Category => self.category.clone().map(FieldValue::Text),
            ProductColumn::Price => self.price.clone().map(FieldValue::Text),
            ProductColumn::Stocked => self.stocked.map(FieldValue::Flag),
        }
    }

    fn collation(column: ProductColumn) -> Collation {
        match column {
            ProductColumn::Id | ProductColumn::Price => Collation::Numeric,
            _ => Collation::Text,
        }
    }
}

/// Options of the category filter: the "no filter" placeholder followed by
/// every distinct category in first-seen order. A category spelled like the
/// placeholder is not listed twice.
pub fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut categories = vec![NO_FILTER.to_string()];
    for category in products.iter().filter_map(|p| p.category.as_ref()) {
        if !categories.contains(category) {
            categories.push(category.clone());
        }
    }
    categories
}

// ============================================================================
// Draft
// ============================================================================

/// New-product form. `id` stays 0 until the draft is submitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stocked: bool,
}

impl ProductDraft {
    /// No text was entered. The stocked checkbox alone does not make a product.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.category.is_empty() && self.price.is_empty()
    }

    /// Update a text field; ignored for `Id` and `Stocked`
    pub fn set_text(&mut self, column: ProductColumn, value: String) {
        match column {
            ProductColumn::Name => self.name = value,
            ProductColumn::Category => self.category = value,
            ProductColumn::Price => self.price = value,
            ProductColumn::Id | ProductColumn::Stocked => {}
        }
    }

    pub fn toggle_stocked(&mut self) {
        self.stocked = !self.stocked;
    }

    pub fn to_product(&self, id: ProductId) -> Product {
        Product::new(
            id,
            self.name.clone(),
            self.category.clone(),
            self.price.clone(),
            self.stocked,
        )
    }
}
