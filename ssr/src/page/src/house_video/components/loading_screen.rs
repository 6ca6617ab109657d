use component::{buttons::OutlineButton, progress_ring::ProgressRing};
use leptos::prelude::*;
use state::house_video::HouseVideoState;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let state = HouseVideoState::get();
    let message = Memo::new(move |_| state.loading_message());

    view! {
        <div class="flex flex-col gap-8 items-center py-8">
            <ProgressRing />
            <div class="text-center">
                <h2 class="mb-2 text-xl font-bold">"Din video bliver lavet"</h2>
                <p class="text-sm text-neutral-400" aria-live="polite">
                    {move || message.get()}
                </p>
                <p class="mt-2 text-xs text-neutral-500">"Det kan tage et par minutter."</p>
            </div>
            <div class="flex gap-2 items-center">
                <div class="w-2 h-2 bg-pink-500 rounded-full animate-bounce" style="animation-delay: 0ms"></div>
                <div class="w-2 h-2 bg-pink-500 rounded-full animate-bounce" style="animation-delay: 150ms"></div>
                <div class="w-2 h-2 bg-pink-500 rounded-full animate-bounce" style="animation-delay: 300ms"></div>
            </div>
            <OutlineButton on_click=move || state.reset() classes="rounded-lg".to_string()>
                "Start forfra"
            </OutlineButton>
        </div>
    }
}
