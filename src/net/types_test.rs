use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_admin_parses() {
    let role: Role = serde_json::from_str("\"Admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}

#[test]
fn role_user_parses() {
    let role: Role = serde_json::from_str("\"User\"").unwrap();
    assert_eq!(role, Role::User);
}

#[test]
fn role_unknown_string_degrades_to_user() {
    let role: Role = serde_json::from_str("\"Moderator\"").unwrap();
    assert_eq!(role, Role::User);
}

#[test]
fn role_missing_field_defaults_to_user() {
    let user: User = serde_json::from_str(
        r#"{"_id":"1","name":"Alice","email":"a@b.com"}"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::User);
}

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_mongo_style_underscore_id() {
    let user: User = serde_json::from_str(
        r#"{"_id":"u1","name":"Alice","email":"a@b.com","role":"Admin"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.bio, None);
}

#[test]
fn user_accepts_plain_id() {
    let user: User =
        serde_json::from_str(r#"{"id":"u2","name":"Bob","email":"b@b.com"}"#).unwrap();
    assert_eq!(user.id, "u2");
}

#[test]
fn auth_response_parses_token_and_profile() {
    let resp: AuthResponse = serde_json::from_str(
        r#"{"token":"T","data":{"_id":"u1","name":"Alice","email":"a@b.com","role":"User"}}"#,
    )
    .unwrap();
    assert_eq!(resp.token, "T");
    assert_eq!(resp.data.name, "Alice");
}

// =============================================================
// Amounts
// =============================================================

#[test]
fn transaction_amount_accepts_integer() {
    let tx: Transaction = serde_json::from_str(
        r#"{"_id":"t1","title":"Rent","amount":125000,"category_id":"c1","date":"2026-03-01"}"#,
    )
    .unwrap();
    assert_eq!(tx.amount, 125_000);
    assert_eq!(tx.note, None);
}

#[test]
fn transaction_amount_accepts_whole_float() {
    let tx: Transaction = serde_json::from_str(
        r#"{"_id":"t1","title":"Rent","amount":125000.0,"category_id":"c1","date":"2026-03-01"}"#,
    )
    .unwrap();
    assert_eq!(tx.amount, 125_000);
}

#[test]
fn transaction_amount_rejects_fractional_float() {
    let result: Result<Transaction, _> = serde_json::from_str(
        r#"{"_id":"t1","title":"Rent","amount":1250.5,"category_id":"c1","date":"2026-03-01"}"#,
    );
    assert!(result.is_err());
}

// =============================================================
// FlowKind
// =============================================================

#[test]
fn flow_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&FlowKind::Income).unwrap(), "\"income\"");
    assert_eq!(serde_json::to_string(&FlowKind::Expense).unwrap(), "\"expense\"");
}

#[test]
fn flow_kind_endpoint_segments() {
    assert_eq!(FlowKind::Income.endpoint_segment(), "incomes");
    assert_eq!(FlowKind::Expense.endpoint_segment(), "expenses");
}

// =============================================================
// Paginated
// =============================================================

#[test]
fn paginated_users_parse() {
    let page: Paginated<User> = serde_json::from_str(
        r#"{"items":[{"_id":"u1","name":"Alice","email":"a@b.com"}],"total":11,"page":2,"pages":3}"#,
    )
    .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 11);
    assert_eq!(page.page, 2);
    assert_eq!(page.pages, 3);
}

#[test]
fn overview_report_defaults_empty_series() {
    let report: OverviewReport = serde_json::from_str(
        r#"{"user_count":4,"income_total":10,"expense_total":5}"#,
    )
    .unwrap();
    assert!(report.monthly.is_empty());
    assert!(report.top_categories.is_empty());
}
