use super::state::ProductModal;
use crate::domain::a001_product::api::ProductsApi;
use crate::shared::config::EditPayloadSource;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::payload::ProductPayload;
use leptos::prelude::*;
use std::sync::Arc;

/// ViewModel for the product list: owns the collection and the modal state.
///
/// Every successful mutation closes its modal and reloads the whole
/// collection. Failures are logged and leave the state as it was.
#[derive(Clone)]
pub struct ProductListViewModel {
    pub products: RwSignal<Vec<Product>>,
    pub modal: RwSignal<ProductModal>,
    api: Arc<dyn ProductsApi>,
    edit_payload_source: EditPayloadSource,
}

impl ProductListViewModel {
    pub fn new(api: Arc<dyn ProductsApi>, edit_payload_source: EditPayloadSource) -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            modal: RwSignal::new(ProductModal::Closed),
            api,
            edit_payload_source,
        }
    }

    // ------------------------------------------------------------------
    // Modal state
    // ------------------------------------------------------------------

    pub fn open_add(&self) {
        self.modal.set(ProductModal::Adding);
    }

    pub fn open_edit(&self, product: Product) {
        self.modal.set(ProductModal::Editing(product));
    }

    pub fn open_delete(&self, product: Product) {
        self.modal.set(ProductModal::ConfirmingDelete(product));
    }

    pub fn close(&self) {
        self.modal.set(ProductModal::Closed);
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Replace the collection with the server's current list
    pub async fn load(&self) {
        match self.api.list().await {
            Ok(products) => {
                log::debug!("Loaded {} products", products.len());
                self.products.set(products);
            }
            Err(e) => log::error!("Error fetching products: {}", e),
        }
    }

    pub async fn add_product(&self, payload: ProductPayload) {
        match self.api.create(payload).await {
            Ok(()) => self.finish(ProductModal::Adding).await,
            Err(e) => log::error!("Error adding product: {}", e),
        }
    }

    /// Submit the edit modal. With `EditPayloadSource::Selection` the values
    /// sent are those of the product the modal was opened with, not `form_payload`.
    pub async fn edit_product(&self, form_payload: ProductPayload) {
        let issued_from = self.modal.get_untracked();
        let ProductModal::Editing(selection) = &issued_from else {
            log::warn!("Edit submitted while no product is being edited");
            return;
        };

        let payload = match self.edit_payload_source {
            EditPayloadSource::Selection => ProductPayload::from_product(selection),
            EditPayloadSource::Form => form_payload,
        };

        match self.api.update(selection.id, payload).await {
            Ok(()) => self.finish(issued_from).await,
            Err(e) => log::error!("Error editing product: {}", e),
        }
    }

    /// Delete the product shown in the confirmation modal
    pub async fn confirm_delete(&self) {
        let issued_from = self.modal.get_untracked();
        let ProductModal::ConfirmingDelete(selection) = &issued_from else {
            log::warn!("Delete confirmed while no product is selected");
            return;
        };

        match self.api.delete(selection.id).await {
            Ok(()) => self.finish(issued_from).await,
            Err(e) => log::error!("Error deleting product: {}", e),
        }
    }

    /// Close the modal the mutation came from (unless the user already moved on), then reload.
    async fn finish(&self, issued_from: ProductModal) {
        self.modal
            .maybe_update(|current| current.close_if_current(&issued_from));
        self.load().await;
    }

    // ------------------------------------------------------------------
    // Fire-and-forget wrappers for event handlers
    // ------------------------------------------------------------------

    pub fn spawn_load(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load().await });
    }

    pub fn spawn_add(&self, payload: ProductPayload) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.add_product(payload).await });
    }

    pub fn spawn_edit(&self, payload: ProductPayload) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.edit_product(payload).await });
    }

    pub fn spawn_confirm_delete(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.confirm_delete().await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiError;
    use async_trait::async_trait;
    use contracts::domain::a001_product::aggregate::{ProductId, ProductImage};
    use contracts::domain::a001_product::payload::FormPart;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(ProductPayload),
        Update(ProductId, ProductPayload),
        Delete(ProductId),
    }

    #[derive(Default)]
    struct FakeProductsApi {
        products: Mutex<Vec<Product>>,
        calls: Mutex<Vec<Call>>,
        fail_list: AtomicBool,
        fail_mutations: AtomicBool,
    }

    impl FakeProductsApi {
        fn with_products(products: Vec<Product>) -> Arc<Self> {
            Arc::new(Self {
                products: Mutex::new(products),
                ..Self::default()
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn list_calls(&self) -> usize {
            self.calls().iter().filter(|c| **c == Call::List).count()
        }

        fn clear_calls(&self) {
            self.calls.lock().unwrap().clear();
        }

        fn record(&self, call: Call) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(call);
            if self.fail_mutations.load(Ordering::SeqCst) {
                Err(ApiError::Status {
                    status: 500,
                    status_text: "Internal Server Error".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl ProductsApi for FakeProductsApi {
        async fn list(&self) -> Result<Vec<Product>, ApiError> {
            self.calls.lock().unwrap().push(Call::List);
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(ApiError::Network("connection refused".into()));
            }
            Ok(self.products.lock().unwrap().clone())
        }

        async fn create(&self, payload: ProductPayload) -> Result<(), ApiError> {
            self.record(Call::Create(payload))
        }

        async fn update(&self, id: ProductId, payload: ProductPayload) -> Result<(), ApiError> {
            self.record(Call::Update(id, payload))
        }

        async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
            self.record(Call::Delete(id))
        }
    }

    fn text_part<'a>(parts: &'a [(&'static str, FormPart)], name: &str) -> Option<&'a str> {
        match parts.iter().find(|(n, _)| *n == name) {
            Some((_, FormPart::Text(value))) => Some(value.as_str()),
            _ => None,
        }
    }

    fn product(id: i64, name: &str, amount: &str, quantity: u32) -> Product {
        Product {
            id: ProductId::new(id),
            product_name: name.into(),
            product_amount: amount.into(),
            product_quantity: quantity.to_string(),
            product_image: Some(ProductImage::Remote(format!(
                "http://localhost:8000/storage/{}.png",
                id
            ))),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Bolt", "0.25", 100),
            product(3, "Nut", "0.10", 250),
            product(7, "Widget", "9.99", 4),
        ]
    }

    fn view_model(api: &Arc<FakeProductsApi>) -> ProductListViewModel {
        ProductListViewModel::new(api.clone(), EditPayloadSource::Selection)
    }

    fn typed_payload() -> ProductPayload {
        ProductPayload {
            product_name: "Typed name".into(),
            product_amount: "1000".into(),
            product_quantity: "99".into(),
            product_image: None,
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_load_fills_collection_in_server_order() {
        let api = FakeProductsApi::with_products(catalog());
        let vm = view_model(&api);

        vm.load().await;

        let products = vm.products.get_untracked();
        assert_eq!(products.len(), 3);
        assert_eq!(products, catalog());
        assert_eq!(vm.modal.get_untracked(), ProductModal::Closed);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_failed_initial_load_leaves_collection_empty() {
        let api = FakeProductsApi::with_products(catalog());
        api.fail_list.store(true, Ordering::SeqCst);
        let vm = view_model(&api);

        vm.load().await;

        assert!(vm.products.get_untracked().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_add_success_closes_modal_and_reloads_once() {
        let api = FakeProductsApi::with_products(catalog());
        let vm = view_model(&api);
        vm.open_add();

        vm.add_product(typed_payload()).await;

        assert_eq!(vm.modal.get_untracked(), ProductModal::Closed);
        assert_eq!(
            api.calls(),
            vec![Call::Create(typed_payload()), Call::List]
        );
        assert_eq!(vm.products.get_untracked().len(), 3);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_add_failure_keeps_modal_open_without_reload() {
        let api = FakeProductsApi::with_products(catalog());
        api.fail_mutations.store(true, Ordering::SeqCst);
        let vm = view_model(&api);
        vm.open_add();

        vm.add_product(typed_payload()).await;

        assert_eq!(vm.modal.get_untracked(), ProductModal::Adding);
        assert_eq!(api.list_calls(), 0);
        assert!(vm.products.get_untracked().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_edit_submits_selection_values_not_typed_ones() {
        let api = FakeProductsApi::with_products(catalog());
        let vm = view_model(&api);
        let widget = product(7, "Widget", "9.99", 4);
        vm.open_edit(widget.clone());

        vm.edit_product(typed_payload()).await;

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        let Call::Update(id, payload) = &calls[0] else {
            panic!("expected update, got {:?}", calls[0]);
        };
        assert_eq!(*id, ProductId::new(7));
        assert_eq!(payload, &ProductPayload::from_product(&widget));

        let parts = payload.clone().into_update_parts();
        assert_eq!(text_part(&parts, "_method"), Some("PUT"));
        assert_eq!(text_part(&parts, "product_name"), Some("Widget"));
        assert_eq!(text_part(&parts, "product_amount"), Some("9.99"));
        assert_eq!(text_part(&parts, "product_quantity"), Some("4"));

        assert_eq!(calls[1], Call::List);
        assert_eq!(vm.modal.get_untracked(), ProductModal::Closed);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_edit_with_form_source_submits_typed_values() {
        let api = FakeProductsApi::with_products(catalog());
        let vm = ProductListViewModel::new(api.clone(), EditPayloadSource::Form);
        vm.open_edit(product(7, "Widget", "9.99", 4));

        vm.edit_product(typed_payload()).await;

        assert_eq!(
            api.calls()[0],
            Call::Update(ProductId::new(7), typed_payload())
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_edit_failure_keeps_modal_open() {
        let api = FakeProductsApi::with_products(catalog());
        api.fail_mutations.store(true, Ordering::SeqCst);
        let vm = view_model(&api);
        let widget = product(7, "Widget", "9.99", 4);
        vm.open_edit(widget.clone());

        vm.edit_product(typed_payload()).await;

        assert_eq!(vm.modal.get_untracked(), ProductModal::Editing(widget));
        assert_eq!(api.list_calls(), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_delete_targets_selected_id_only() {
        let api = FakeProductsApi::with_products(catalog());
        let vm = view_model(&api);
        vm.load().await;
        api.clear_calls();
        vm.open_delete(product(3, "Nut", "0.10", 250));

        vm.confirm_delete().await;

        assert_eq!(
            api.calls(),
            vec![Call::Delete(ProductId::new(3)), Call::List]
        );
        assert_eq!(vm.modal.get_untracked(), ProductModal::Closed);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_delete_failure_keeps_confirmation_open() {
        let api = FakeProductsApi::with_products(catalog());
        api.fail_mutations.store(true, Ordering::SeqCst);
        let vm = view_model(&api);
        let nut = product(3, "Nut", "0.10", 250);
        vm.open_delete(nut.clone());

        vm.confirm_delete().await;

        assert_eq!(vm.modal.get_untracked(), ProductModal::ConfirmingDelete(nut));
        assert_eq!(api.list_calls(), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_cancel_delete_issues_no_calls() {
        let api = FakeProductsApi::with_products(catalog());
        let vm = view_model(&api);
        vm.open_delete(product(3, "Nut", "0.10", 250));

        vm.close();

        assert!(api.calls().is_empty());
        assert_eq!(vm.modal.get_untracked(), ProductModal::Closed);
    }

    #[test]
    fn test_opening_edit_replaces_add_modal() {
        let api = FakeProductsApi::with_products(catalog());
        let vm = view_model(&api);
        let widget = product(7, "Widget", "9.99", 4);

        vm.open_add();
        vm.open_edit(widget.clone());

        assert_eq!(vm.modal.get_untracked(), ProductModal::Editing(widget));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_submit_without_matching_modal_is_ignored() {
        let api = FakeProductsApi::with_products(catalog());
        let vm = view_model(&api);

        vm.edit_product(typed_payload()).await;
        vm.confirm_delete().await;

        assert!(api.calls().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_success_does_not_close_a_newer_modal() {
        let api = FakeProductsApi::with_products(catalog());
        let vm = view_model(&api);
        vm.open_add();
        // the user switched to another modal while the create was in flight
        let issued_from = vm.modal.get_untracked();
        let bolt = product(1, "Bolt", "0.25", 100);
        vm.open_delete(bolt.clone());

        vm.finish(issued_from).await;

        assert_eq!(vm.modal.get_untracked(), ProductModal::ConfirmingDelete(bolt));
        assert_eq!(api.list_calls(), 1);
    }
}
