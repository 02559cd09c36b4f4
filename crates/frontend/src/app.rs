use crate::domain::a001_product::api::{HttpProductsApi, ProductsApi};
use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // One client per app instance, configured up front.
    let api: Arc<dyn ProductsApi> =
        Arc::new(HttpProductsApi::new(ApiClient::new(config.api.clone())));

    view! {
        <ProductList api=api edit_payload_source=config.ui.edit_payload_source />
    }
}
