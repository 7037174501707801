//! Bulk-select dialog view.

use crate::components::modal::Modal;
use crate::features::bulk_select::state::BulkDialog;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BulkSelectModalProps {
    pub(crate) dialog: Option<BulkDialog>,
    pub(crate) on_input: Callback<String>,
    pub(crate) on_confirm: Callback<()>,
    pub(crate) on_cancel: Callback<()>,
}

#[function_component(BulkSelectModal)]
pub(crate) fn bulk_select_modal(props: &BulkSelectModalProps) -> Html {
    let Some(dialog) = props.dialog.clone() else {
        return html! {};
    };
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };
    let onsubmit = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_confirm.emit(());
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <Modal open={true} title="Select Multiple Rows" on_close={props.on_cancel.clone()}>
            <form onsubmit={onsubmit}>
                <p class="text-sm mb-4">{"Enter number of rows to select across all pages"}</p>
                <input
                    type="number"
                    class={classes!("input", "w-full", "mb-2", dialog.error.is_some().then_some("input-error"))}
                    placeholder="e.g. 20"
                    min="1"
                    aria-label="Number of rows"
                    value={dialog.input.clone()}
                    disabled={dialog.busy}
                    oninput={oninput}
                />
                {dialog.error.clone().map(|err| html! { <p class="text-error text-sm mb-2" role="alert">{err}</p> }).unwrap_or_default()}
                <div class="modal-action flex justify-end gap-3">
                    <button type="button" class="btn btn-ghost" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="btn btn-primary" disabled={dialog.busy}>
                        {if dialog.busy { "Selecting..." } else { "Select" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
