use leptos::*;

use crate::state::notification::{Notification, Severity};

#[component]
pub fn NotificationModal(
    #[prop(into)] notification: Signal<Notification>,
    on_close: Callback<()>,
) -> impl IntoView {
    let close_on_backdrop = on_close;
    let close_on_header_button = on_close;
    let close_on_footer_button = on_close;

    let title = move || notification.get().title().unwrap_or_default().to_string();
    let message = move || notification.get().message().unwrap_or_default().to_string();
    let severity = Signal::derive(move || notification.get().severity());

    view! {
        <Show when=move || notification.get().is_open()>
            <div class="fixed inset-0 z-[100] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40 backdrop-blur-sm"
                    on:click=move |_| close_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[101] bg-white rounded-2xl shadow-2xl max-w-sm w-full p-8"
                    role="dialog"
                    aria-modal="true"
                >
                    <button
                        type="button"
                        aria-label="Close"
                        class="absolute top-4 right-4 text-gray-400 hover:text-gray-600"
                        on:click=move |_| close_on_header_button.call(())
                    >
                        {"✕"}
                    </button>
                    <div class="flex flex-col items-center text-center space-y-4">
                        <SeverityIcon severity=severity />
                        <h3 class="text-lg font-semibold text-gray-900">{title}</h3>
                        <div class="text-sm text-gray-600 whitespace-pre-line">{message}</div>
                        <button
                            type="button"
                            class="w-full bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg px-4 py-2 text-sm font-medium"
                            on:click=move |_| close_on_footer_button.call(())
                        >
                            {"Close"}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn SeverityIcon(#[prop(into)] severity: Signal<Option<Severity>>) -> impl IntoView {
    move || match severity.get() {
        Some(Severity::Success) => view! {
            <svg
                class="w-12 h-12 text-green-500"
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
            >
                <circle cx="12" cy="12" r="9" stroke-width="2" />
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2l4-4" />
            </svg>
        }
        .into_view(),
        Some(Severity::Error) => view! {
            <svg
                class="w-12 h-12 text-red-500"
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
            >
                <circle cx="12" cy="12" r="9" stroke-width="2" />
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 9l-6 6M9 9l6 6" />
            </svg>
        }
        .into_view(),
        _ => view! {
            <svg
                class="w-12 h-12 text-blue-500"
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
            >
                <circle cx="12" cy="12" r="9" stroke-width="2" />
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 16v-4M12 8h.01" />
            </svg>
        }
        .into_view(),
    }
}
