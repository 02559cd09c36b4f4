//! Product form
//!
//! - view_model.rs: field state seeded from an optional product, payload building
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductForm;
pub use view_model::{ProductFormState, ProductFormViewModel};
