use component::{buttons::GradientButton, error_banner::ErrorBanner};
use leptos::prelude::*;
use leptos_icons::*;
use state::house_video::HouseVideoState;

#[component]
pub fn UploadPanel(generate: Action<(), ()>) -> impl IntoView {
    let state = HouseVideoState::get();
    let preview = Memo::new(move |_| state.preview_src());
    let error = Signal::derive(move || state.upload_error());
    let busy = Signal::derive(move || state.is_busy());

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use web_sys::HtmlInputElement;

            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            leptos::task::spawn_local(async move {
                match utils::web::read_selected_file(file).await {
                    Ok(selected) => {
                        state.upload.update(|u| {
                            let _ = u.select_file(selected);
                        });
                    }
                    Err(e) => state.upload.update(|u| u.report(&e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div class="flex flex-col gap-6">
            <p class="text-sm text-center text-neutral-400">
                "Upload et billede af et hus, så bygger vi et feriecenter ovenpå det."
            </p>
            <div class="relative">
                <input
                    type="file"
                    accept="image/*"
                    on:change=on_file_change
                    class="absolute inset-0 z-10 w-full h-full opacity-0 cursor-pointer"
                />
                <div class="flex flex-col justify-center items-center p-8 rounded-lg border border-dashed transition-colors cursor-pointer bg-neutral-900 border-neutral-700 hover:bg-neutral-800">
                    <Show
                        when=move || preview.with(Option::is_some)
                        fallback=|| {
                            view! {
                                <div class="flex flex-col gap-3 items-center">
                                    <Icon icon=icondata::AiPictureOutlined attr:class="text-3xl text-neutral-500" />
                                    <span class="text-sm text-neutral-500">"Klik for at vælge et billede"</span>
                                </div>
                            }
                        }
                    >
                        <img
                            src=move || preview.get().unwrap_or_default()
                            class="object-contain max-w-full rounded max-h-64"
                            alt="Dit hus"
                        />
                    </Show>
                </div>
            </div>
            <ErrorBanner message=error />
            <GradientButton
                on_click=move || {
                    state.upload.update(|u| u.clear_error());
                    generate.dispatch(());
                }
                classes="w-full h-12 font-bold rounded-lg".to_string()
                disabled=busy
            >
                <div class="flex gap-2 justify-center items-center">
                    <Icon icon=icondata::AiThunderboltOutlined attr:class="text-lg" />
                    "Generér video"
                </div>
            </GradientButton>
        </div>
    }
}
