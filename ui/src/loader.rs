use std::fmt;

use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// A failed load attempt. Transport and parse failures both surface through
/// `Display`; the pipeline does not distinguish them further.
#[derive(Debug)]
pub enum LoadError {
    Http(u16, String),
    Network(String),
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Http(status, text) => write!(f, "HTTP {status} {text}"),
            LoadError::Network(msg) => write!(f, "Network error: {msg}"),
            LoadError::Parse(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

/// Fetch a JSON document. `force_reload` appends a timestamp query parameter
/// to defeat the HTTP cache; it changes nothing else.
pub async fn fetch_json(url: &str, force_reload: bool) -> Result<Value, LoadError> {
    let final_url = if force_reload {
        format!("{url}?t={}", js_sys::Date::now() as u64)
    } else {
        url.to_string()
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&final_url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_err)?;

    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Network("unexpected fetch response type".to_string()))?;

    if !resp.ok() {
        return Err(LoadError::Http(resp.status(), resp.status_text()));
    }

    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let body = text
        .as_string()
        .ok_or_else(|| LoadError::Network("response body was not text".to_string()))?;

    serde_json::from_str(&body).map_err(|e| LoadError::Parse(e.to_string()))
}

fn js_err(v: JsValue) -> LoadError {
    let msg = v
        .as_string()
        .unwrap_or_else(|| format!("{v:?}"));
    LoadError::Network(msg)
}
