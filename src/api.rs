//! REST Bindings
//!
//! Frontend bindings to the comment backend, over `web_sys` fetch.
//! Every call resolves to `Result<T, String>` with a user-displayable message.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{Comment, CreateCommentRequest, SortOrder};

const API_URL: &str = "/comments";
const SERVER_ERROR: &str = "Ошибка сервера";

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

fn js_err(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Issue one request and return the parsed JSON body (None on 204).
///
/// Single error boundary: HTTP failures are mapped to the backend's `error`
/// field when the body carries one, otherwise a generic message.
async fn call(method: &str, url: &str, body: Option<String>) -> Result<Option<JsValue>, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch response".to_string())?;

    if !response.ok() {
        let message = read_error_body(&response).await;
        web_sys::console::warn_1(
            &format!("[API] {} {} failed: {}", method, url, message).into(),
        );
        return Err(message);
    }

    if response.status() == 204 {
        return Ok(None);
    }

    let json = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(Some(json))
}

async fn read_error_body(response: &Response) -> String {
    let Ok(promise) = response.json() else {
        return SERVER_ERROR.to_string();
    };
    match JsFuture::from(promise).await {
        Ok(value) => serde_wasm_bindgen::from_value::<ErrorBody>(value)
            .map(|body| body.error)
            .unwrap_or_else(|_| SERVER_ERROR.to_string()),
        Err(_) => SERVER_ERROR.to_string(),
    }
}

fn parse<T: DeserializeOwned>(value: Option<JsValue>) -> Result<T, String> {
    let value = value.ok_or_else(|| "empty response body".to_string())?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// `GET /comments?limit=&offset=&sort=`
pub async fn list_comments(limit: u32, offset: u32, sort: SortOrder) -> Result<Vec<Comment>, String> {
    let url = format!(
        "{}?limit={}&offset={}&sort={}",
        API_URL,
        limit,
        offset,
        sort.as_str()
    );
    parse(call("GET", &url, None).await?)
}

/// `GET /comments/search?query=&limit=&offset=`
pub async fn search_comments(query: &str, limit: u32, offset: u32) -> Result<Vec<Comment>, String> {
    let url = format!(
        "{}/search?query={}&limit={}&offset={}",
        API_URL,
        utf8_percent_encode(query, NON_ALPHANUMERIC),
        limit,
        offset
    );
    parse(call("GET", &url, None).await?)
}

/// `POST /comments`
pub async fn create_comment(request: &CreateCommentRequest<'_>) -> Result<Comment, String> {
    let body = serde_json::to_string(request).map_err(|e| e.to_string())?;
    parse(call("POST", API_URL, Some(body)).await?)
}

/// `DELETE /comments/{id}` (204 on success)
pub async fn delete_comment(id: i64) -> Result<(), String> {
    let _ = call("DELETE", &format!("{}/{}", API_URL, id), None).await?;
    Ok(())
}
