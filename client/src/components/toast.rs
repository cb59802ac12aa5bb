//! Toast stack for success and error notices.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

/// Success notices close on their own after this long.
pub const SUCCESS_DISMISS_MS: u32 = 1_500;
/// Errors stay up longer so the provider text can be read.
pub const ERROR_DISMISS_MS: u32 = 4_000;

/// Push a success notice and schedule its dismissal.
pub fn notify_success(notices: RwSignal<NoticeState>, title: impl Into<String>) {
    if let Some(id) = notices.try_update(|n| n.success(title)) {
        schedule_dismiss(notices, id, SUCCESS_DISMISS_MS);
    }
}

/// Push an error notice and schedule its dismissal.
pub fn notify_error(notices: RwSignal<NoticeState>, title: impl Into<String>, text: impl ToString) {
    let title = title.into();
    let text = text.to_string();
    log::warn!("{title}: {text}");
    if let Some(id) = notices.try_update(|n| n.error(title, text)) {
        schedule_dismiss(notices, id, ERROR_DISMISS_MS);
    }
}

fn schedule_dismiss(notices: RwSignal<NoticeState>, id: u64, after_ms: u32) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(after_ms).await;
        notices.try_update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notices, id, after_ms);
    }
}

/// Fixed top-center stack of notices.
#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class="toast"
                            class:toast--success=notice.kind == NoticeKind::Success
                            class:toast--error=notice.kind == NoticeKind::Error
                        >
                            <div class="toast__body">
                                <strong class="toast__title">{notice.title}</strong>
                                {notice.text.map(|text| view! { <p class="toast__text">{text}</p> })}
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
