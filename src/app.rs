use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

/// Multipart applications carry up to three 10 MiB documents.
const BODY_LIMIT: usize = 1024 * 1024 * 32;

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = Self::router(ctx.clone());

        Self { ctx, router }
    }

    pub fn router(ctx: Arc<Context>) -> Router {
        Router::new()
            .nest("/api", modules::get_router())
            .with_state(ctx.clone())
            .layer(Extension(ctx))
            .layer(DefaultBodyLimit::max(BODY_LIMIT))
            .layer(trace::TraceLayer::new_for_http())
            .layer(
                cors::CorsLayer::new()
                    .allow_methods([
                        Method::OPTIONS,
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::PATCH,
                        Method::DELETE,
                    ])
                    .allow_headers([
                        header::CONTENT_TYPE,
                        header::AUTHORIZATION,
                        HeaderName::from_static(modules::auth::service::csrf::CSRF_HEADER),
                    ])
                    .allow_origin(cors::Any),
            )
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address).await?;

        tracing::info!("BuzzarFeed API listening on {}", address);

        axum::serve(listener, self.router).await
    }
}
