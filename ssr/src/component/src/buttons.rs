use leptos::prelude::*;

#[component]
pub fn GradientButton(
    children: Children,
    on_click: impl Fn() + 'static,
    #[prop(optional)] classes: String,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class=format!(
                "px-5 py-3 text-white bg-linear-to-r from-orange-400 via-pink-500 to-fuchsia-600 transition disabled:opacity-50 disabled:cursor-not-allowed {classes}",
            )
            disabled=move || disabled.get()
            on:click=move |_| on_click()
        >
            {children()}
        </button>
    }
}

#[component]
pub fn OutlineButton(
    children: Children,
    on_click: impl Fn() + 'static,
    #[prop(optional)] classes: String,
) -> impl IntoView {
    view! {
        <button
            class=format!(
                "px-5 py-3 border-2 border-neutral-600 bg-transparent text-white hover:border-neutral-500 transition-colors {classes}",
            )
            on:click=move |_| on_click()
        >
            {children()}
        </button>
    }
}

/// A link styled like [`GradientButton`], used for downloads.
#[component]
pub fn GradientLinkButton(
    children: Children,
    #[prop(into)] href: Signal<String>,
    #[prop(into)] download: Signal<String>,
    #[prop(optional)] classes: String,
) -> impl IntoView {
    view! {
        <a
            href=move || href.get()
            download=move || download.get()
            class=format!(
                "px-5 py-3 text-center text-white bg-linear-to-r from-orange-400 via-pink-500 to-fuchsia-600 {classes}",
            )
        >
            {children()}
        </a>
    }
}
