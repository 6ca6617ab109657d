use leptos::html::Video;
use leptos::prelude::*;

/// Inline player for a generated clip.
#[component]
pub fn VideoPlayer(
    #[prop(optional)] node_ref: NodeRef<Video>,
    #[prop(into)] src: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <video
            node_ref=node_ref
            class="w-full rounded-lg bg-neutral-900 aspect-video"
            src=move || src.get()
            controls
            autoplay
            loop
            muted
            playsinline
            preload="metadata"
        >
            <p class="p-4 text-white">"Din browser kan ikke afspille videoen."</p>
        </video>
    }
}
