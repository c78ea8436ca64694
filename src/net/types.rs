//! Shared wire DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. Deserialization is deliberately lenient where the backend is
//! loose: ids arrive as either `id` or `_id`, amounts may arrive as whole
//! floats, and unknown role strings collapse to the non-admin default.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role controlling access to the admin surface.
///
/// Any role string other than `"Admin"` deserializes to [`Role::User`], so a
/// missing or unrecognized role always lands on the non-admin path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Role {
    /// Full access: user management, global categories, aggregate reports.
    Admin,
    /// Standard account managing only its own finances.
    #[default]
    User,
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        if raw == "Admin" { Self::Admin } else { Self::User }
    }
}

/// An authenticated user profile as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Account role; absent or unknown values become [`Role::User`].
    #[serde(default)]
    pub role: Role,
    /// Free-text bio shown on the profile page, if set.
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Successful login/register response: a bearer token plus the profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque credential attached to subsequent requests.
    pub token: String,
    /// The authenticated user's profile.
    pub data: User,
}

/// Direction of money movement; used by both categories and transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    /// Money coming in (salary, interest, ...).
    Income,
    /// Money going out (rent, groceries, ...).
    Expense,
}

impl FlowKind {
    /// Wire/endpoint segment for this kind (`"incomes"` / `"expenses"`).
    #[must_use]
    pub fn endpoint_segment(self) -> &'static str {
        match self {
            Self::Income => "incomes",
            Self::Expense => "expenses",
        }
    }
}

/// A transaction category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name (e.g. `"Groceries"`).
    pub name: String,
    /// Whether the category applies to incomes or expenses.
    pub kind: FlowKind,
}

/// A single income or expense entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Short human title (e.g. `"March rent"`).
    pub title: String,
    /// Amount in integer cents; whole floats from the backend are accepted.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub amount: i64,
    /// Category this entry belongs to.
    pub category_id: String,
    /// Optional free-text note.
    #[serde(default)]
    pub note: Option<String>,
    /// Entry date as an ISO `YYYY-MM-DD` string.
    pub date: String,
}

/// A monthly spending limit for one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique budget identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Category the limit applies to.
    pub category_id: String,
    /// Limit in integer cents.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub amount: i64,
    /// Month the limit applies to, as `YYYY-MM`.
    pub month: String,
}

/// One page of a server-paginated listing (admin tables).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Rows on this page.
    pub items: Vec<T>,
    /// Total matching rows across all pages.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total: i64,
    /// 1-based page index of this page.
    pub page: u32,
    /// Total number of pages.
    pub pages: u32,
}

/// Aggregate total for one category, used in reports and charts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category display name.
    pub category: String,
    /// Summed amount in integer cents.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total: i64,
}

/// Income/expense totals for one month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Month as `YYYY-MM`.
    pub month: String,
    /// Summed income in integer cents.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub income: i64,
    /// Summed expenses in integer cents.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub expense: i64,
}

/// Admin overview report across all users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewReport {
    /// Number of registered users.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub user_count: i64,
    /// All-time income total in integer cents.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub income_total: i64,
    /// All-time expense total in integer cents.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub expense_total: i64,
    /// Month-by-month totals, oldest first.
    #[serde(default)]
    pub monthly: Vec<MonthlyTotal>,
    /// Largest expense categories, descending.
    #[serde(default)]
    pub top_categories: Vec<CategoryTotal>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
