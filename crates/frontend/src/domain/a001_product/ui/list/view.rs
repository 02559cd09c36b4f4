use super::state::ProductModal;
use super::view_model::ProductListViewModel;
use crate::domain::a001_product::api::ProductsApi;
use crate::domain::a001_product::ui::form::ProductForm;
use crate::shared::config::EditPayloadSource;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::payload::ProductPayload;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList(
    api: Arc<dyn ProductsApi>,
    #[prop(optional)] edit_payload_source: EditPayloadSource,
) -> impl IntoView {
    let vm = ProductListViewModel::new(api, edit_payload_source);

    // initial load
    vm.spawn_load();

    let on_close = Callback::new({
        let vm = vm.clone();
        move |_: ()| vm.close()
    });

    let on_add = Callback::new({
        let vm = vm.clone();
        move |payload: ProductPayload| vm.spawn_add(payload)
    });

    let on_edit = Callback::new({
        let vm = vm.clone();
        move |payload: ProductPayload| vm.spawn_edit(payload)
    });

    let rows = {
        let vm = vm.clone();
        move || {
            vm.products
                .get()
                .into_iter()
                .map(|product| view! { <ProductRow product=product vm=vm.clone() /> })
                .collect_view()
        }
    };

    let modal_view = {
        let vm = vm.clone();
        move || match vm.modal.get() {
            ProductModal::Closed => ().into_any(),
            ProductModal::Adding => view! {
                <Modal title="Add Product".to_string() on_close=on_close>
                    <ProductForm on_save=on_add />
                </Modal>
            }
            .into_any(),
            ProductModal::Editing(product) => view! {
                <Modal title="Edit Product".to_string() on_close=on_close>
                    <ProductForm product=product on_save=on_edit />
                </Modal>
            }
            .into_any(),
            ProductModal::ConfirmingDelete(product) => {
                let vm_yes = vm.clone();
                let vm_no = vm.clone();
                view! {
                    <Modal title="Delete Product".to_string() on_close=on_close>
                        <p>{format!("Are you sure you want to delete {}?", product.product_name)}</p>
                        <Space>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm_yes.spawn_confirm_delete()
                            >
                                "Yes"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm_no.close()
                            >
                                "No"
                            </Button>
                        </Space>
                    </Modal>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="product-list" style="padding: 20px;">
            <h1>{icon("products")}" Product List"</h1>
            <div style="margin-bottom: 20px;">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click={
                        let vm = vm.clone();
                        move |_| vm.open_add()
                    }
                >
                    {icon("plus")}
                    " Add Product"
                </Button>
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ID"</TableHeaderCell>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Amount"</TableHeaderCell>
                        <TableHeaderCell>"Quantity"</TableHeaderCell>
                        <TableHeaderCell>"Image"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
            {modal_view}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductRow(product: Product, vm: ProductListViewModel) -> impl IntoView {
    let image = product
        .image_url()
        .map(|url| {
            view! {
                <img
                    src=url.to_string()
                    alt=product.product_name.clone()
                    style="width: 50px; height: 50px;"
                />
            }
        });

    let for_edit = product.clone();
    let for_delete = product.clone();
    let vm_edit = vm.clone();

    view! {
        <TableRow>
            <TableCell><TableCellLayout>{product.id.to_string()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{product.product_name.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{product.product_amount.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{product.product_quantity.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{image}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| vm_edit.open_edit(for_edit.clone())
                        >
                            {icon("edit")}
                            " Edit"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| vm.open_delete(for_delete.clone())
                        >
                            {icon("delete")}
                            " Delete"
                        </Button>
                    </Space>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
