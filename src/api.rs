//! HTTP Helpers
//!
//! Thin JSON fetch over `window.fetch`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, RequestInit, Response};

use crate::config;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Http(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("request aborted")]
    Aborted,
}

impl FetchError {
    fn from_js(err: JsValue) -> Self {
        match err.dyn_ref::<web_sys::DomException>() {
            Some(dom) if dom.name() == "AbortError" => FetchError::Aborted,
            _ => FetchError::Network(format!("{:?}", err)),
        }
    }
}

/// User record from the demo API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// GET `url` and decode the JSON body
pub async fn fetch_json<T: DeserializeOwned>(url: &str, signal: Option<&AbortSignal>) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;
    let init = RequestInit::new();
    init.set_method("GET");
    if let Some(signal) = signal {
        init.set_signal(Some(signal));
    }

    let promise = window.fetch_with_str_and_init(url, &init);
    let resp: Response = JsFuture::from(promise)
        .await
        .map_err(FetchError::from_js)?
        .dyn_into()
        .map_err(|_| FetchError::Decode("not a Response".into()))?;

    if !resp.ok() {
        return Err(FetchError::Http(resp.status()));
    }

    let body = resp.json().map_err(FetchError::from_js)?;
    let value = JsFuture::from(body).await.map_err(FetchError::from_js)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn list_users(signal: Option<&AbortSignal>) -> Result<Vec<User>, FetchError> {
    let url = config::users_url();
    log::debug!("GET {}", url);
    fetch_json(&url, signal).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_without_email() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"Leanne Graham","username":"Bret"}"#).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert!(user.email.is_empty());
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Http(404).to_string(), "HTTP 404");
        assert_eq!(FetchError::Aborted.to_string(), "request aborted");
    }
}
