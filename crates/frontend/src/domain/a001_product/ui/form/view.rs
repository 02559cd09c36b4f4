use super::view_model::ProductFormViewModel;
use crate::shared::api_utils::read_upload;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::payload::ProductPayload;
use leptos::ev;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

const INPUT_STYLE: &str = "width: 100%; padding: 8px; margin-bottom: 10px;";
const SUBMIT_STYLE: &str = "padding: 10px 20px; background-color: blue; color: white; \
    border: none; border-radius: 5px; cursor: pointer;";

/// Name / amount / quantity / image inputs.
///
/// Submitting hands the payload to `on_save`; saving and closing the modal
/// are up to the caller.
#[component]
#[allow(non_snake_case)]
pub fn ProductForm(
    /// Product to pre-fill the inputs with; blank form when absent
    #[prop(optional)]
    product: Option<Product>,
    on_save: Callback<ProductPayload>,
) -> impl IntoView {
    let vm = ProductFormViewModel::new(product.as_ref());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_save.run(vm.payload());
    };

    let handle_file_change = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match read_upload(&file).await {
                Ok(upload) => vm.set_upload(upload),
                Err(e) => log::error!("Error reading image: {}", e),
            }
        });
    };

    view! {
        <form on:submit=handle_submit>
            <div>
                <label>"Name"</label>
                <input
                    type="text"
                    required
                    style=INPUT_STYLE
                    prop:value=move || vm.form.with(|f| f.name.clone())
                    on:input=move |ev| vm.set_name(event_target_value(&ev))
                />
            </div>
            <div>
                <label>"Amount"</label>
                <input
                    type="text"
                    required
                    style=INPUT_STYLE
                    prop:value=move || vm.form.with(|f| f.amount.clone())
                    on:input=move |ev| vm.set_amount(event_target_value(&ev))
                />
            </div>
            <div>
                <label>"Quantity"</label>
                <input
                    type="number"
                    required
                    style=INPUT_STYLE
                    prop:value=move || vm.form.with(|f| f.quantity.clone())
                    on:input=move |ev| vm.set_quantity(event_target_value(&ev))
                />
            </div>
            <div>
                <label>"Image"</label>
                <input
                    type="file"
                    accept="image/*"
                    style="margin-bottom: 10px;"
                    on:change=handle_file_change
                />
            </div>
            <button type="submit" style=SUBMIT_STYLE>"Save"</button>
        </form>
    }
}
