use contracts::domain::a001_product::aggregate::Product;

/// The modal currently shown by the product list.
///
/// The product under edit or delete lives inside its variant, so at most one
/// modal and one selection exist at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProductModal {
    #[default]
    Closed,
    Adding,
    Editing(Product),
    ConfirmingDelete(Product),
}

impl ProductModal {
    /// Close the modal if it is still the one a finished request came from.
    ///
    /// Returns whether the state changed, so callers can skip notifying
    /// subscribers when the user has already moved on to another modal.
    pub fn close_if_current(&mut self, issued_from: &ProductModal) -> bool {
        if self == issued_from && *self != ProductModal::Closed {
            *self = ProductModal::Closed;
            true
        } else {
            false
        }
    }
}
