use super::aggregate::{ImageUpload, Product, ProductImage};

/// Form field the backend reads to treat a POST as another method.
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

/// One value of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text(String),
    File(ImageUpload),
}

pub type FormParts = Vec<(&'static str, FormPart)>;

/// Fields submitted by create and update.
///
/// Values are kept as entered: amount and quantity are not validated here,
/// the backend owns that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductPayload {
    pub product_name: String,
    pub product_amount: String,
    pub product_quantity: String,
    pub product_image: Option<ProductImage>,
}

impl ProductPayload {
    /// Payload carrying the current server-side values of `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            product_amount: product.product_amount.clone(),
            product_quantity: product.product_quantity.clone(),
            product_image: product.product_image.clone(),
        }
    }

    /// Multipart body for `POST products`.
    ///
    /// Every field is always present; a missing image is sent as an empty string.
    pub fn into_parts(self) -> FormParts {
        let image = match self.product_image {
            None => FormPart::Text(String::new()),
            Some(ProductImage::Remote(url)) => FormPart::Text(url),
            Some(ProductImage::PendingUpload(upload)) => FormPart::File(upload),
        };
        vec![
            ("product_name", FormPart::Text(self.product_name)),
            ("product_amount", FormPart::Text(self.product_amount)),
            ("product_quantity", FormPart::Text(self.product_quantity)),
            ("product_image", image),
        ]
    }

    /// Multipart body for `POST products/{id}` with the `_method=PUT` override.
    pub fn into_update_parts(self) -> FormParts {
        let mut parts = vec![(METHOD_OVERRIDE_FIELD, FormPart::Text("PUT".to_string()))];
        parts.extend(self.into_parts());
        parts
    }
}
