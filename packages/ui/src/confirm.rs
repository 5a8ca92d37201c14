//! In-tree confirmation dialog for destructive actions. Replaces the
//! blocking browser prompt with explicit state the calling view owns: the
//! view keeps a `Signal<Option<Id>>` of the record awaiting confirmation
//! and renders this dialog while it is `Some`. Confirm fires the action,
//! cancel (button or clicking outside the card) clears it — nothing happens
//! until one of the two is chosen.

use dioxus::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[props(default = "Are you sure?".to_string())] title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal-box confirm-box",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                h3 { "{title}" }
                p { "{message}" }

                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
