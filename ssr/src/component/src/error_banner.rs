use leptos::prelude::*;
use leptos_icons::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div
                role="alert"
                class="flex gap-2 items-start p-3 w-full text-sm text-red-300 rounded-lg border bg-red-950/40 border-red-800"
            >
                <Icon icon=icondata::AiExclamationCircleOutlined attr:class="shrink-0 mt-0.5 text-base" />
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
