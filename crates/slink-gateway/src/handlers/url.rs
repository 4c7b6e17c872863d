use crate::error::Result;
use crate::model::{AckResponse, ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use slink_core::{LinkId, ShortCode, ShortenerError};

pub async fn shorten_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>)> {
    let Json(request) = request?;
    let link = state.shortener().shorten(request.long_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            new_url: link.short_url(state.base_url()),
            db_id: link.id.to_string(),
            code: link.code.to_string(),
        }),
    ))
}

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect> {
    let code = ShortCode::new(code).map_err(ShortenerError::from)?;
    let link = state.shortener().redirect(&code).await?;
    Ok(Redirect::permanent(&link.long_url))
}

pub async fn update_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    request: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<AckResponse>> {
    let Json(request) = request?;
    let matched = state
        .shortener()
        .update(&LinkId::from(id), request.long_url)
        .await?;

    Ok(Json(AckResponse {
        message: if matched {
            "Long Url Updated"
        } else {
            "No url with this id, nothing updated"
        },
        error: false,
        matched,
    }))
}

pub async fn delete_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AckResponse>> {
    let matched = state.shortener().delete(&LinkId::from(id)).await?;

    Ok(Json(AckResponse {
        message: if matched {
            "Long Url Deleted"
        } else {
            "No url with this id, nothing deleted"
        },
        error: false,
        matched,
    }))
}
