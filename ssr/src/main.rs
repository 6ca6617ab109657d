#[cfg(feature = "ssr")]
mod server {
    use axum::{
        body::Body as AxumBody,
        extract::{DefaultBodyLimit, State},
        http::Request,
        response::{IntoResponse, Response},
        routing::get,
        Router,
    };
    use consts::MAX_REQUEST_BODY_BYTES;
    use feriecenter_web_leptos_ssr::{
        app::{shell, App},
        fallback::file_and_error_handler,
        init::AppStateBuilder,
        telemetry,
    };
    use http::{header, Method};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
    use state::server::AppState;
    use tower_http::cors::{AllowOrigin, CorsLayer};
    use tracing::instrument;

    #[instrument(skip_all)]
    pub async fn server_fn_handler(
        State(app_state): State<AppState>,
        request: Request<AxumBody>,
    ) -> impl IntoResponse {
        handle_server_fns_with_context(
            move || {
                provide_context(app_state.veo.clone());
            },
            request,
        )
        .await
    }

    #[instrument(skip_all)]
    pub async fn leptos_routes_handler(
        state: State<AppState>,
        req: Request<AxumBody>,
    ) -> Response {
        let State(app_state) = state.clone();
        let handler = leptos_axum::render_route_with_context(
            app_state.routes.clone(),
            move || {
                provide_context(app_state.veo.clone());
            },
            move || shell(app_state.leptos_options.clone()),
        );
        handler(state, req).await.into_response()
    }

    /// Same-origin only unless `CORS_ALLOWED_ORIGINS` lists extra origins.
    fn cors_layer() -> Option<CorsLayer> {
        let origins: Vec<String> = std::env::var("CORS_ALLOWED_ORIGINS")
            .ok()?
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if origins.is_empty() {
            return None;
        }
        Some(
            CorsLayer::new()
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
                .allow_origin(AllowOrigin::predicate(move |origin, _| {
                    origin
                        .to_str()
                        .map(|o| origins.iter().any(|allowed| allowed == o))
                        .unwrap_or(false)
                })),
        )
    }

    pub async fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();
        telemetry::init_telemetry(&telemetry::Config::default())?;

        // Setting get_configuration(None) means we'll be using cargo-leptos's env values
        let conf = get_configuration(None)?;
        let leptos_options = conf.leptos_options;
        let addr = leptos_options.site_addr;
        let routes = generate_route_list(App);

        let app_state = AppStateBuilder::new(leptos_options, routes.clone()).build()?;

        let terminate = {
            use tokio::signal;

            let ctrl_c = async {
                signal::ctrl_c()
                    .await
                    .expect("failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                signal::unix::signal(signal::unix::SignalKind::terminate())
                    .expect("failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            async {
                tokio::select! {
                    _ = ctrl_c => {},
                    _ = terminate => {},
                }
                log::info!("stopping...");
            }
        };

        let app = Router::new()
            .route(
                "/api/{*fn_name}",
                get(server_fn_handler).post(server_fn_handler),
            )
            .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
            .leptos_routes_with_handler(routes, get(leptos_routes_handler))
            .fallback(file_and_error_handler)
            .with_state(app_state);

        let app = match cors_layer() {
            Some(cors) => app.layer(cors),
            None => app,
        };

        log::info!("listening on http://{}", &addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(terminate)
            .await?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
fn main() {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        if let Err(e) = server::main_impl().await {
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
    });
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
