use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара, назначается сервером
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Image
// ============================================================================

/// A file picked in the browser, already read into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Product image: either a URL served by the backend or a file waiting to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductImage {
    Remote(String),
    PendingUpload(ImageUpload),
}

impl ProductImage {
    pub fn remote_url(&self) -> Option<&str> {
        match self {
            ProductImage::Remote(url) => Some(url.as_str()),
            ProductImage::PendingUpload(_) => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар, как его возвращает `GET products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(default, deserialize_with = "text_or_default")]
    pub product_name: String,

    /// Денежная сумма хранится текстом: сервер может отдать и "9.99", и 9.99
    #[serde(default, deserialize_with = "text_or_default")]
    pub product_amount: String,

    /// Текстом, как и сумма: строка таблицы не должна ломать весь список
    #[serde(default, deserialize_with = "text_or_default")]
    pub product_quantity: String,

    #[serde(
        default,
        deserialize_with = "image_from_json",
        serialize_with = "image_to_json"
    )]
    pub product_image: Option<ProductImage>,
}

impl Product {
    /// URL for the table thumbnail, if the backend has one.
    pub fn image_url(&self) -> Option<&str> {
        self.product_image.as_ref().and_then(ProductImage::remote_url)
    }
}

/// Parse the body of `GET products`.
pub fn parse_product_list(body: &str) -> Result<Vec<Product>, String> {
    serde_json::from_str(body).map_err(|e| format!("Invalid product list: {}", e))
}

// ============================================================================
// Lenient JSON helpers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn text_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        None => String::new(),
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Integer(n)) => n.to_string(),
        Some(TextOrNumber::Float(n)) => n.to_string(),
    })
}

fn image_from_json<'de, D>(deserializer: D) -> Result<Option<ProductImage>, D::Error>
where
    D: Deserializer<'de>,
{
    let url = Option::<String>::deserialize(deserializer)?;
    Ok(url
        .filter(|u| !u.trim().is_empty())
        .map(ProductImage::Remote))
}

fn image_to_json<S>(image: &Option<ProductImage>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // a pending upload has no URL until the backend stores it
    match image.as_ref().and_then(ProductImage::remote_url) {
        Some(url) => serializer.serialize_some(url),
        None => serializer.serialize_none(),
    }
}
