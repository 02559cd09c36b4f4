//! Product list (root screen)
//!
//! - state.rs: which modal is open and for which product
//! - view_model.rs: collection + modal state, load / add / edit / delete commands
//! - view.rs: table and the three modals

pub mod state;
mod view;
mod view_model;

pub use state::ProductModal;
pub use view::ProductList;
pub use view_model::ProductListViewModel;
