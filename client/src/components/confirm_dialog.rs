use leptos::prelude::*;

/// Modal yes/no prompt. Escape or a backdrop click cancels.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="dialog-backdrop"
            on:click=move |_| on_cancel.run(())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Escape" {
                    ev.prevent_default();
                    on_cancel.run(());
                }
            }
        >
            <div class="dialog" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                <h3 class="dialog__title">{title}</h3>
                <p class="dialog__message">{move || message.get()}</p>
                <div class="dialog__actions">
                    <button class="btn btn--ghost" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>{confirm_label}</button>
                </div>
            </div>
        </div>
    }
}
