//! Local stand-in for the GovInfo, Federal Register and BEA APIs.
//!
//! Each route mirrors the URL shape of the real service and echoes the
//! request back so clients can be checked end to end over real HTTP.

use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Collection codes served under `/bulkdata/json`.
pub const COLLECTIONS: &[&str] = &[
    "PAI", "CFR", "FR", "BILLSTATUS", "CBD", "PPP", "SCD", "BILLS", "GOVMAN", "BILLSUM", "ECFR",
    "HMAN", "PLAW", "STATUTE",
];

/// Body returned by every Federal Register route.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub path: String,
    pub query: Vec<(String, String)>,
}

pub fn app() -> Router {
    Router::new()
        .route("/bulkdata/json", get(bulk_sources))
        .route("/bulkdata/json/{collection}/{folder}", get(bulk_folder))
        .route("/api/v1/{*path}", get(federal_register))
        .route("/api/data", get(bea))
        .route("/api/data/", get(bea))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn bulk_sources() -> Json<Value> {
    let files: Vec<Value> = COLLECTIONS
        .iter()
        .map(|code| json!({ "name": code, "folder": true, "link": format!("/bulkdata/json/{code}") }))
        .collect();
    Json(json!({ "files": files }))
}

async fn bulk_folder(Path((collection, folder)): Path<(String, String)>) -> Result<Json<Value>, StatusCode> {
    if !COLLECTIONS.contains(&collection.as_str()) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "files": [{
            "name": format!("{collection}-{folder}.xml"),
            "folder": false,
            "link": format!("/bulkdata/{collection}/{folder}/{collection}-{folder}.xml"),
        }]
    })))
}

async fn federal_register(
    Path(path): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<Echo>, StatusCode> {
    if !path.ends_with(".json") {
        return Err(StatusCode::NOT_FOUND);
    }
    if query.iter().any(|(k, v)| k == "per_page" && v.parse::<u32>().map_or(true, |n| n > 1000)) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    Ok(Json(Echo {
        path: format!("/api/v1/{path}"),
        query,
    }))
}

async fn bea(Query(query): Query<Vec<(String, String)>>) -> Response {
    let param = |name: &str| {
        query
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    };

    if param("userid").map_or(true, str::is_empty) {
        return (StatusCode::UNAUTHORIZED, "missing UserID").into_response();
    }

    let is_xml = param("resultformat").is_some_and(|f| f.eq_ignore_ascii_case("xml"));
    if is_xml {
        let params: String = query
            .iter()
            .map(|(k, v)| {
                format!(
                    "<RequestParam ParameterName=\"{}\" ParameterValue=\"{v}\"/>",
                    k.to_uppercase()
                )
            })
            .collect();
        let body = format!("<BEAAPI><Request>{params}</Request><Results/></BEAAPI>");
        return ([(header::CONTENT_TYPE, "application/xml")], body).into_response();
    }

    let params: Vec<Value> = query
        .iter()
        .map(|(k, v)| json!({ "ParameterName": k.to_uppercase(), "ParameterValue": v }))
        .collect();
    Json(json!({
        "BEAAPI": {
            "Request": { "RequestParam": params },
            "Results": {}
        }
    }))
    .into_response()
}
