//! REST API helpers for communicating with the finance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token from persisted storage attached to every authenticated request.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>` with a human-readable message, taken
//! from the backend's `{"message": ...}` error body when present. Nothing
//! here panics; failed calls surface as transient notifications at the
//! call site.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AuthResponse, Budget, Category, FlowKind, OverviewReport, Paginated, Transaction, User,
};
#[cfg(feature = "hydrate")]
use crate::state::session::TOKEN_KEY;
#[cfg(feature = "hydrate")]
use crate::util::persist::{BrowserStore, KeyValueStore};

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn transactions_endpoint(kind: FlowKind) -> String {
    format!("/api/{}", kind.endpoint_segment())
}

#[cfg(any(test, feature = "hydrate"))]
fn transaction_endpoint(kind: FlowKind, id: &str) -> String {
    format!("/api/{}/{id}", kind.endpoint_segment())
}

#[cfg(any(test, feature = "hydrate"))]
fn category_endpoint(id: &str) -> String {
    format!("/api/categories/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn budgets_endpoint(month: &str) -> String {
    format!("/api/budgets?month={}", encode_query_value(month))
}

#[cfg(any(test, feature = "hydrate"))]
fn budget_endpoint(id: &str) -> String {
    format!("/api/budgets/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_users_endpoint(search: &str, page: u32) -> String {
    format!(
        "/api/admin/users?search={}&page={page}",
        encode_query_value(search)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_user_endpoint(id: &str) -> String {
    format!("/api/admin/users/{id}")
}

/// Percent-encode the characters that would break a query value.
#[cfg(any(test, feature = "hydrate"))]
fn encode_query_value(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

#[cfg(feature = "hydrate")]
fn auth_header() -> Option<String> {
    BrowserStore.get(TOKEN_KEY).map(|t| bearer_value(&t))
}

/// Extract a human-readable message from a failed response, preferring the
/// backend's `{"message": ...}` body over a bare status line.
#[cfg(feature = "hydrate")]
async fn error_message(what: &str, resp: gloo_net::http::Response) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => request_failed_message(what, status),
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(what: &str, url: &str) -> Result<T, String> {
    let mut req = gloo_net::http::Request::get(url);
    if let Some(header) = auth_header() {
        req = req.header("Authorization", &header);
    }
    let resp = req.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_message(what, resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn send_json<T: serde::de::DeserializeOwned>(
    what: &str,
    method: &str,
    url: &str,
    payload: &serde_json::Value,
) -> Result<T, String> {
    let mut req = match method {
        "PUT" => gloo_net::http::Request::put(url),
        _ => gloo_net::http::Request::post(url),
    };
    if let Some(header) = auth_header() {
        req = req.header("Authorization", &header);
    }
    let resp = req
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_message(what, resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn delete(what: &str, url: &str) -> Result<(), String> {
    let mut req = gloo_net::http::Request::delete(url);
    if let Some(header) = auth_header() {
        req = req.header("Authorization", &header);
    }
    let resp = req.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_message(what, resp).await);
    }
    Ok(())
}

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a human-readable message when credentials are rejected or the
/// request fails; the session is left untouched by the caller in that case.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        send_json("login", "POST", "/api/auth/login", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns a human-readable message when registration is rejected.
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::json!({ "name": name, "email": email, "password": password });
        send_json("register", "POST", "/api/auth/register", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Update the current user's profile via `PUT /api/users/me`.
///
/// # Errors
///
/// Returns a human-readable message when the update is rejected.
pub async fn update_profile(
    name: &str,
    bio: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::json!({ "name": name, "bio": bio, "avatar_url": avatar_url });
        send_json("profile update", "PUT", "/api/users/me", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, bio, avatar_url);
        Err("not available on server".to_owned())
    }
}

/// Fetch all categories visible to the current user.
///
/// # Errors
///
/// Returns a human-readable message when the listing fails.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("category list", "/api/categories").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a category via `POST /api/categories`.
///
/// # Errors
///
/// Returns a human-readable message when creation is rejected.
pub async fn create_category(name: &str, kind: FlowKind) -> Result<Category, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "kind": kind });
        send_json("category create", "POST", "/api/categories", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, kind);
        Err("not available on server".to_owned())
    }
}

/// Delete a category via `DELETE /api/categories/{id}`.
///
/// # Errors
///
/// Returns a human-readable message when deletion fails.
pub async fn delete_category(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete("category delete", &category_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's incomes or expenses.
///
/// # Errors
///
/// Returns a human-readable message when the listing fails.
pub async fn fetch_transactions(kind: FlowKind) -> Result<Vec<Transaction>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("transaction list", &transactions_endpoint(kind)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = kind;
        Err("not available on server".to_owned())
    }
}

/// Create an income or expense entry.
///
/// # Errors
///
/// Returns a human-readable message when creation is rejected.
pub async fn create_transaction(
    kind: FlowKind,
    title: &str,
    amount: i64,
    category_id: &str,
    note: Option<&str>,
    date: &str,
) -> Result<Transaction, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "title": title,
            "amount": amount,
            "category_id": category_id,
            "note": note,
            "date": date,
        });
        send_json("transaction create", "POST", &transactions_endpoint(kind), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, title, amount, category_id, note, date);
        Err("not available on server".to_owned())
    }
}

/// Delete an income or expense entry.
///
/// # Errors
///
/// Returns a human-readable message when deletion fails.
pub async fn delete_transaction(kind: FlowKind, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete("transaction delete", &transaction_endpoint(kind, id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch budgets for a given `YYYY-MM` month.
///
/// # Errors
///
/// Returns a human-readable message when the listing fails.
pub async fn fetch_budgets(month: &str) -> Result<Vec<Budget>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("budget list", &budgets_endpoint(month)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = month;
        Err("not available on server".to_owned())
    }
}

/// Create or replace the budget for one category and month.
///
/// # Errors
///
/// Returns a human-readable message when the upsert is rejected.
pub async fn upsert_budget(category_id: &str, amount: i64, month: &str) -> Result<Budget, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload =
            serde_json::json!({ "category_id": category_id, "amount": amount, "month": month });
        send_json("budget save", "POST", "/api/budgets", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (category_id, amount, month);
        Err("not available on server".to_owned())
    }
}

/// Delete a budget via `DELETE /api/budgets/{id}`.
///
/// # Errors
///
/// Returns a human-readable message when deletion fails.
pub async fn delete_budget(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete("budget delete", &budget_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Admin: fetch one page of the user table, filtered by `search`.
///
/// # Errors
///
/// Returns a human-readable message when the listing fails.
pub async fn fetch_admin_users(search: &str, page: u32) -> Result<Paginated<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("user list", &admin_users_endpoint(search, page)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (search, page);
        Err("not available on server".to_owned())
    }
}

/// Admin: delete a user account.
///
/// # Errors
///
/// Returns a human-readable message when deletion fails.
pub async fn delete_user(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete("user delete", &admin_user_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Admin: fetch the aggregate overview report.
///
/// # Errors
///
/// Returns a human-readable message when the fetch fails.
pub async fn fetch_overview_report() -> Result<OverviewReport, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("report", "/api/admin/reports/overview").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
