use leptos::prelude::*;
use leptos_icons::*;

/// Spinning gradient ring with a house in the middle.
#[component]
pub fn ProgressRing() -> impl IntoView {
    view! {
        <div class="relative w-32 h-32">
            <div class="absolute inset-0 rounded-full border-4 border-neutral-800"></div>
            <svg
                class="absolute inset-0 w-full h-full -rotate-90 animate-spin"
                viewBox="0 0 128 128"
            >
                <circle
                    cx="64"
                    cy="64"
                    r="60"
                    fill="none"
                    stroke="url(#ring-gradient)"
                    stroke-width="4"
                    stroke-linecap="round"
                    stroke-dasharray="377"
                    stroke-dashoffset="94.25"
                />
                <defs>
                    <linearGradient id="ring-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="#FDBA74" />
                        <stop offset="50%" stop-color="#EC4899" />
                        <stop offset="100%" stop-color="#A21CAF" />
                    </linearGradient>
                </defs>
            </svg>
            <div class="flex absolute inset-0 justify-center items-center">
                <Icon icon=icondata::AiHomeOutlined attr:class="text-4xl text-white" />
            </div>
        </div>
    }
}
