use contracts::domain::a001_product::aggregate::{ImageUpload, Product, ProductImage};
use contracts::domain::a001_product::payload::ProductPayload;
use leptos::prelude::*;

/// Local values of the four form inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFormState {
    pub name: String,
    pub amount: String,
    pub quantity: String,
    pub image: Option<ProductImage>,
}

impl ProductFormState {
    /// Seed from the product being edited, or blank fields for a new one
    pub fn seeded(product: Option<&Product>) -> Self {
        match product {
            Some(p) => Self {
                name: p.product_name.clone(),
                amount: p.product_amount.clone(),
                quantity: p.product_quantity.clone(),
                image: p.product_image.clone(),
            },
            None => Self::default(),
        }
    }

    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            product_name: self.name.clone(),
            product_amount: self.amount.clone(),
            product_quantity: self.quantity.clone(),
            product_image: self.image.clone(),
        }
    }
}

/// ViewModel for the product form. Seeded once; later changes to the
/// source product are not reflected.
#[derive(Clone, Copy)]
pub struct ProductFormViewModel {
    pub form: RwSignal<ProductFormState>,
}

impl ProductFormViewModel {
    pub fn new(product: Option<&Product>) -> Self {
        Self {
            form: RwSignal::new(ProductFormState::seeded(product)),
        }
    }

    pub fn set_name(&self, value: String) {
        self.form.update(|f| f.name = value);
    }

    pub fn set_amount(&self, value: String) {
        self.form.update(|f| f.amount = value);
    }

    pub fn set_quantity(&self, value: String) {
        self.form.update(|f| f.quantity = value);
    }

    pub fn set_upload(&self, upload: ImageUpload) {
        self.form
            .update(|f| f.image = Some(ProductImage::PendingUpload(upload)));
    }

    /// Payload from the current field values
    pub fn payload(&self) -> ProductPayload {
        self.form.with_untracked(ProductFormState::to_payload)
    }
}
