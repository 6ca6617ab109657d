use component::buttons::GradientButton;
use leptos::prelude::*;
use leptos_icons::*;
use state::house_video::HouseVideoState;

#[component]
pub fn ErrorScreen() -> impl IntoView {
    let state = HouseVideoState::get();
    let message = move || state.failure_message().unwrap_or_default();

    view! {
        <div class="flex flex-col gap-6 items-center py-8 text-center">
            <Icon icon=icondata::AiCloseCircleOutlined attr:class="text-5xl text-red-400" />
            <h2 class="text-xl font-bold">"Noget gik galt"</h2>
            <p role="alert" class="text-sm text-neutral-300">{message}</p>
            <GradientButton
                on_click=move || state.reset()
                classes="w-full h-12 font-bold rounded-lg".to_string()
            >
                "Prøv igen"
            </GradientButton>
        </div>
    }
}
