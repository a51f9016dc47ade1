use super::notice::{Flash, Notice};
use super::pages;
use super::state::AppState;
use crate::chart;
use crate::core::{AddLogic, DeleteLogic, EntryInput, LimitLogic, TotalsLogic};
use crate::errors::AppResult;
use crate::models::DaySummary;
use crate::utils::{date, fmt_amount};
use axum::{
    Form, Json,
    extract::{Query, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    notice: Option<String>,
}

impl NoticeQuery {
    fn flash(&self) -> Option<Flash> {
        self.notice
            .as_deref()
            .and_then(Notice::from_code)
            .map(|n| n.flash())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitForm {
    #[serde(default)]
    limit: String,
}

async fn today_summary(state: &AppState) -> AppResult<DaySummary> {
    let today = date::today();
    state
        .with_store(move |store, cfg| TotalsLogic::day(store, today, cfg.default_sugar_limit))
        .await
}

async fn current_limit(state: &AppState) -> AppResult<f64> {
    state
        .with_store(|store, cfg| LimitLogic::get(store, cfg.default_sugar_limit))
        .await
}

/// GET `/`
pub async fn index(
    State(state): State<AppState>,
    Query(q): Query<NoticeQuery>,
) -> AppResult<Html<String>> {
    let summary = today_summary(&state).await?;
    Ok(Html(pages::index(
        &summary,
        q.flash().as_ref(),
        &EntryInput::default(),
    )))
}

/// POST `/`
pub async fn add_entry(State(state): State<AppState>, Form(input): Form<EntryInput>) -> Response {
    let submitted = input.clone();
    let result = state
        .with_store(move |store, _| AddLogic::apply(store, &input, None))
        .await;

    match result {
        Ok(entry) => {
            debug!(id = entry.id, "entry added from web form");
            Redirect::to(&Notice::EntrySaved.redirect_target("/")).into_response()
        }
        Err(e) if e.is_user_error() => match today_summary(&state).await {
            Ok(summary) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(pages::index(
                    &summary,
                    Some(&Flash::error(e.to_string())),
                    &submitted,
                )),
            )
                .into_response(),
            Err(e) => e.into_response(),
        },
        Err(e) => e.into_response(),
    }
}

/// GET `/entries`
pub async fn entries(
    State(state): State<AppState>,
    Query(q): Query<NoticeQuery>,
) -> AppResult<Html<String>> {
    let today = date::today();
    let rows = state
        .with_store(move |store, _| TotalsLogic::entries(store, today))
        .await?;

    Ok(Html(pages::entries(today, &rows, q.flash().as_ref())))
}

/// POST `/entries/delete-last`
pub async fn delete_last(State(state): State<AppState>) -> AppResult<Redirect> {
    let today = date::today();
    let removed = state
        .with_store(move |store, _| DeleteLogic::last(store, today))
        .await?;

    let notice = match removed {
        Some(_) => Notice::LastDeleted,
        None => Notice::NothingToDelete,
    };
    Ok(Redirect::to(&notice.redirect_target("/entries")))
}

/// POST `/entries/delete-today`
pub async fn delete_today(State(state): State<AppState>) -> AppResult<Redirect> {
    let today = date::today();
    let removed = state
        .with_store(move |store, _| DeleteLogic::day(store, today))
        .await?;

    let notice = if removed > 0 {
        Notice::DayCleared
    } else {
        Notice::NothingToDelete
    };
    Ok(Redirect::to(&notice.redirect_target("/entries")))
}

/// GET `/settings`
pub async fn settings(
    State(state): State<AppState>,
    Query(q): Query<NoticeQuery>,
) -> AppResult<Html<String>> {
    let limit = current_limit(&state).await?;
    Ok(Html(pages::settings(
        limit,
        &fmt_amount(limit),
        q.flash().as_ref(),
    )))
}

/// POST `/settings`
pub async fn update_settings(
    State(state): State<AppState>,
    Form(form): Form<LimitForm>,
) -> Response {
    let raw = form.limit.clone();
    let result = state
        .with_store(move |store, _| LimitLogic::set_from_str(store, &raw))
        .await;

    match result {
        Ok(_) => Redirect::to(&Notice::LimitUpdated.redirect_target("/settings")).into_response(),
        Err(e) if e.is_user_error() => match current_limit(&state).await {
            Ok(limit) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(pages::settings(
                    limit,
                    &form.limit,
                    Some(&Flash::error(e.to_string())),
                )),
            )
                .into_response(),
            Err(e) => e.into_response(),
        },
        Err(e) => e.into_response(),
    }
}

/// GET `/chart`
pub async fn chart_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let summary = today_summary(&state).await?;
    let svg = chart::svg::render(&summary.totals, summary.limit());
    Ok(Html(pages::chart(&summary, &svg)))
}

/// GET `/chart.svg`
pub async fn chart_svg(State(state): State<AppState>) -> AppResult<Response> {
    let summary = today_summary(&state).await?;
    let svg = chart::svg::render(&summary.totals, summary.limit());
    Ok(([(CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

/// GET `/api/totals`
pub async fn api_totals(State(state): State<AppState>) -> AppResult<Json<DaySummary>> {
    Ok(Json(today_summary(&state).await?))
}

/// Fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html("<!doctype html><html><body><h1>404 Not Found</h1><p><a href=\"/\">Back</a></p></body></html>"),
    )
}
