use component::{
    buttons::{GradientLinkButton, OutlineButton},
    video_player::VideoPlayer,
};
use leptos::prelude::*;
use leptos_icons::*;
use state::house_video::HouseVideoState;

#[component]
pub fn ResultScreen() -> impl IntoView {
    let state = HouseVideoState::get();
    let file_name = state
        .with_video(|v| v.file_name.clone())
        .unwrap_or_default();

    #[cfg(feature = "hydrate")]
    let object_url = {
        let url = state.with_video(utils::web::video_object_url);
        StoredValue::new_local(url)
    };
    #[cfg(feature = "hydrate")]
    let src = Signal::derive(move || {
        object_url.with_value(|url| url.as_deref().map(str::to_string))
    });
    #[cfg(not(feature = "hydrate"))]
    let src = Signal::derive(|| None::<String>);

    // Revokes the blob URL as soon as the view goes away.
    #[cfg(feature = "hydrate")]
    on_cleanup(move || object_url.set_value(None));

    view! {
        <div class="flex flex-col gap-6">
            <VideoPlayer src=src />
            <div class="text-center">
                <h2 class="mb-2 text-xl font-bold">"Dit feriecenter er klar!"</h2>
                <p class="text-sm text-neutral-400">"Se videoen eller hent den ned."</p>
            </div>
            <div class="flex flex-col gap-3">
                <GradientLinkButton
                    href=Signal::derive(move || src.get().unwrap_or_default())
                    download=file_name
                    classes="w-full h-12 font-bold rounded-lg".to_string()
                >
                    <div class="flex gap-2 justify-center items-center">
                        <Icon icon=icondata::AiDownloadOutlined attr:class="text-lg" />
                        "Download video"
                    </div>
                </GradientLinkButton>
                <OutlineButton on_click=move || state.reset() classes="w-full h-12 font-bold rounded-lg".to_string()>
                    <div class="flex gap-2 justify-center items-center">
                        <Icon icon=icondata::AiReloadOutlined attr:class="text-lg" />
                        "Lav en ny video"
                    </div>
                </OutlineButton>
            </div>
        </div>
    }
}
