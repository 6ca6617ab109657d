use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_interval_fn, utils::Pausable};
use state::house_video::{HouseVideoState, Screen};
use utils::videogen::{GenerationController, Outcome};

use super::{ErrorScreen, LoadingScreen, ResultScreen, UploadPanel};
use crate::house_video::provider::ServerFnProvider;

#[component]
pub fn HouseVideoPage() -> impl IntoView {
    let state = HouseVideoState::register();
    let controller = GenerationController::new(ServerFnProvider, state.lifecycle);
    let message_interval = controller.timing().message_interval.as_millis() as u64;

    let generate = Action::new_local({
        let controller = controller.clone();
        move |_: &()| {
            let controller = controller.clone();
            async move {
                let image = state.selected_image();
                match controller.generate(image.as_ref()).await {
                    Ok(Outcome::Failed(e)) => log::warn!("house video failed: {e}"),
                    Ok(outcome) => log::debug!("house video attempt ended: {outcome:?}"),
                    Err(e) => {
                        state.upload.update(|u| u.report(&e));
                    }
                }
            }
        }
    });

    let Pausable { pause, resume, .. } = use_interval_fn(
        move || {
            controller.tick_message();
        },
        message_interval,
    );
    let polling = Memo::new(move |_| state.is_polling());
    Effect::new(move |_| {
        if polling.get() {
            resume();
        } else {
            pause();
        }
    });

    let screen = Memo::new(move |_| state.screen());

    view! {
        <Title text="Feriecenter på dit hus" />
        <div class="flex flex-col items-center px-4 pt-12 pb-16 min-h-dvh w-dvw text-white bg-black">
            <h1 class="mb-8 text-2xl font-bold text-center">"Byg et feriecenter på dit hus"</h1>
            <div class="w-full max-w-md">
                {move || match screen.get() {
                    Screen::Upload => view! { <UploadPanel generate=generate /> }.into_any(),
                    Screen::Loading => view! { <LoadingScreen /> }.into_any(),
                    Screen::Result => view! { <ResultScreen /> }.into_any(),
                    Screen::Error => view! { <ErrorScreen /> }.into_any(),
                }}
            </div>
        </div>
    }
}
