//! HTTP calls to the program endpoints.

use programedit_common::{parse_wait_seconds, ProgramCollection, WidgetError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Outcome of `GET /programs`.
#[derive(Debug)]
pub enum ProgramsResponse {
    Loaded(ProgramCollection),
    /// Another editor holds the session; the body should be the wait in seconds.
    Locked(String),
}

/// Outcome of `GET /access`.
#[derive(Debug, PartialEq)]
pub enum AccessStatus {
    Granted,
    Locked(String),
}

fn js_error(context: &str, value: JsValue) -> WidgetError {
    WidgetError::Network(format!("{}: {:?}", context, value))
}

async fn get_text(url: &str) -> Result<(u16, String), WidgetError> {
    let window = web_sys::window().ok_or_else(|| WidgetError::MissingElement("window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| js_error("request", e))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch", e))?;
    let response: Response = response.dyn_into().map_err(|e| js_error("response", e))?;

    let body = response.text().map_err(|e| js_error("body", e))?;
    let body = JsFuture::from(body).await.map_err(|e| js_error("body", e))?;
    Ok((response.status(), body.as_string().unwrap_or_default()))
}

/// Fetch the program list. A network failure is reported as a lock with an
/// empty body so that it goes through the same countdown as a real conflict.
pub async fn fetch_programs(url: &str) -> Result<ProgramsResponse, WidgetError> {
    log::info!("Fetching programs from {}", url);
    match get_text(url).await {
        Ok((200, body)) => ProgramCollection::from_json(&body).map(ProgramsResponse::Loaded),
        Ok((status, body)) => {
            log::warn!("{} answered {}: {}", url, status, body);
            Ok(ProgramsResponse::Locked(body))
        }
        Err(err) => {
            log::error!("{}", err);
            Ok(ProgramsResponse::Locked(String::new()))
        }
    }
}

pub async fn probe_access(url: &str) -> Result<AccessStatus, WidgetError> {
    let (status, body) = get_text(url).await?;
    if status == 200 {
        Ok(AccessStatus::Granted)
    } else {
        Ok(AccessStatus::Locked(body))
    }
}

/// Seconds to wait before retrying. Uses the conflict body when it holds a
/// number, otherwise asks the access endpoint, otherwise `fallback`.
pub async fn resolve_wait(body: &str, access_url: &str, fallback: i64) -> i64 {
    if let Some(secs) = parse_wait_seconds(body) {
        return secs;
    }
    match probe_access(access_url).await {
        Ok(AccessStatus::Granted) => 0,
        Ok(AccessStatus::Locked(body)) => parse_wait_seconds(&body).unwrap_or(fallback),
        Err(err) => {
            log::warn!("Access probe failed, waiting {}s: {}", fallback, err);
            fallback
        }
    }
}
