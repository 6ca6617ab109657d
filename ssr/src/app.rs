use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use page::house_video::HouseVideoPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="da">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <div class="flex flex-col gap-4 justify-center items-center text-white bg-black min-h-dvh">
            <h1 class="text-2xl font-bold">"Siden findes ikke"</h1>
            <a href="/" class="underline text-pink-400">"Til forsiden"</a>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/feriecenter-leptos-ssr.css" />
        <Title text="Feriecenter-generator" />
        <Meta name="description" content="Upload et billede af dit hus og se det blive til et feriecenter." />

        <Router>
            <main>
                <Routes fallback=NotFound>
                    <Route path=path!("") view=HouseVideoPage />
                </Routes>
            </main>
        </Router>
    }
}
