use crate::domain::PageKind;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::views::{HomeView, PageView};
use crate::use_cases::render_page::RenderPageUseCase;
use askama::Template;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

pub async fn home() -> Response {
    render_view(&HomeView)
}

#[tracing::instrument(name = "good_page", skip_all)]
pub async fn good_page(State(state): State<Arc<AppState>>) -> Response {
    render(&state, PageKind::Good).await
}

#[tracing::instrument(name = "bad_page", skip_all)]
pub async fn bad_page(State(state): State<Arc<AppState>>) -> Response {
    render(&state, PageKind::Bad).await
}

// Fetch failures never change the status; the page simply shows less.
async fn render(state: &AppState, kind: PageKind) -> Response {
    let use_case = RenderPageUseCase {
        backend: state.backend.as_ref(),
        reporter: state.reporter.as_ref(),
    };
    let page = use_case.execute(kind).await;
    let response = render_view(&PageView::from(&page));

    if kind.no_store() && response.status().is_success() {
        ([(header::CACHE_CONTROL, "no-store")], response).into_response()
    } else {
        response
    }
}

fn render_view(view: &impl Template) -> Response {
    match view.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render template");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
