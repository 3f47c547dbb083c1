use axum::{
    extract::{
        Path, Query,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;

use crate::models::item::{Item, catalogue};
use crate::schemas::pagination_schema::PaginationQuery;
use crate::utils::handler::HandlerResult;
use crate::utils::responder::ApiResponder;
use crate::utils::response::{ErrorInput, Pagination, SuccessOptions};
use crate::utils::validation::{VALIDATION_ERROR, validate_payload};

/// Size of the demo catalogue.
pub const CATALOGUE_SIZE: u64 = 45;

pub async fn index(
    api: ApiResponder,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> HandlerResult {
    let Query(query) = query.map_err(|e| {
        api.error(
            ErrorInput::structured(VALIDATION_ERROR, "Invalid query string"),
            Some(StatusCode::BAD_REQUEST),
            Some(json!({ "query": e.body_text() })),
        )
    })?;
    validate_payload(&api, &query)?;

    let items = catalogue(CATALOGUE_SIZE);
    let total = items.len() as u64;
    let page: Vec<Item> = items
        .into_iter()
        .skip(query.offset() as usize)
        .take(query.limit as usize)
        .collect();

    let pagination = Pagination {
        page: query.page,
        limit: query.limit,
        total,
    };
    Ok(api.success(
        json!({ "items": page }),
        SuccessOptions::with_pagination(pagination),
        None,
    ))
}

pub async fn show(
    api: ApiResponder,
    id: Result<Path<u64>, PathRejection>,
) -> HandlerResult {
    let Path(id) = id.map_err(|e| {
        api.error(
            ErrorInput::structured(VALIDATION_ERROR, "Invalid item id"),
            Some(StatusCode::BAD_REQUEST),
            Some(json!({ "id": e.body_text() })),
        )
    })?;
    match catalogue(CATALOGUE_SIZE).into_iter().find(|item| item.id == id) {
        Some(item) => Ok(api.ok(json!(item))),
        None => Err(api.fail(
            ErrorInput::structured("NOT_FOUND", format!("Item {} not found", id)),
            StatusCode::NOT_FOUND,
        )),
    }
}
