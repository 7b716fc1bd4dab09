//! REST API helpers for loading and saving invoices.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `ApiError` and are never shown verbatim; the form
//! maps every failure to one generic message and logs the detail.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::InvoiceBody;
#[cfg(feature = "hydrate")]
use super::types::InvoiceResponse;

/// API base path. Override at build time with `INVOICE_API_BASE`.
pub const API_BASE: &str = match option_env!("INVOICE_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Failure talking to the invoice endpoints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Where a save should go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(String),
}

/// Load/save collaborator used by the invoice form.
///
/// Futures are not `Send`; everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait InvoiceStore {
    /// Fetch an existing invoice.
    async fn get_invoice(&self, id: &str) -> Result<InvoiceBody, ApiError>;
    /// Persist a new invoice.
    async fn create_invoice(&self, body: &InvoiceBody) -> Result<(), ApiError>;
    /// Replace the invoice stored under `id`.
    async fn update_invoice(&self, body: &InvoiceBody, id: &str) -> Result<(), ApiError>;
}

/// Send `body` to the create or update endpoint depending on `target`.
///
/// # Errors
///
/// Propagates the store's error.
pub async fn submit_invoice<S: InvoiceStore>(store: &S, body: &InvoiceBody, target: &SaveTarget) -> Result<(), ApiError> {
    match target {
        SaveTarget::Create => store.create_invoice(body).await,
        SaveTarget::Update(id) => store.update_invoice(body, id).await,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn invoices_endpoint(base: &str) -> String {
    format!("{}/invoices", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn invoice_endpoint(base: &str, id: &str) -> String {
    format!("{}/{id}", invoices_endpoint(base))
}

/// `InvoiceStore` backed by the REST API.
#[derive(Clone, Debug)]
pub struct HttpInvoiceStore {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    base: String,
}

impl Default for HttpInvoiceStore {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl HttpInvoiceStore {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl InvoiceStore for HttpInvoiceStore {
    async fn get_invoice(&self, id: &str) -> Result<InvoiceBody, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = invoice_endpoint(&self.base, id);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body: InvoiceResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.data)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_invoice(&self, body: &InvoiceBody) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = invoices_endpoint(&self.base);
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(ApiError::Unavailable)
        }
    }

    async fn update_invoice(&self, body: &InvoiceBody, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = invoice_endpoint(&self.base, id);
            let resp = gloo_net::http::Request::put(&url)
                .json(body)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, id);
            Err(ApiError::Unavailable)
        }
    }
}
