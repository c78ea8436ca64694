use super::*;

#[test]
fn bearer_value_prefixes_token() {
    assert_eq!(bearer_value("abc123"), "Bearer abc123");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
}

#[test]
fn transactions_endpoints_split_by_kind() {
    assert_eq!(transactions_endpoint(FlowKind::Income), "/api/incomes");
    assert_eq!(transactions_endpoint(FlowKind::Expense), "/api/expenses");
}

#[test]
fn transaction_endpoint_includes_id() {
    assert_eq!(
        transaction_endpoint(FlowKind::Expense, "t42"),
        "/api/expenses/t42"
    );
}

#[test]
fn category_endpoint_formats_expected_path() {
    assert_eq!(category_endpoint("c1"), "/api/categories/c1");
}

#[test]
fn budgets_endpoint_carries_month_filter() {
    assert_eq!(budgets_endpoint("2026-03"), "/api/budgets?month=2026-03");
}

#[test]
fn budget_endpoint_formats_expected_path() {
    assert_eq!(budget_endpoint("b9"), "/api/budgets/b9");
}

#[test]
fn admin_users_endpoint_carries_search_and_page() {
    assert_eq!(
        admin_users_endpoint("alice", 2),
        "/api/admin/users?search=alice&page=2"
    );
}

#[test]
fn admin_users_endpoint_encodes_search_value() {
    assert_eq!(
        admin_users_endpoint("a b&c", 1),
        "/api/admin/users?search=a%20b%26c&page=1"
    );
}

#[test]
fn admin_user_endpoint_formats_expected_path() {
    assert_eq!(admin_user_endpoint("u7"), "/api/admin/users/u7");
}

#[test]
fn encode_query_value_keeps_unreserved_characters() {
    assert_eq!(encode_query_value("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encode_query_value_escapes_reserved_characters() {
    assert_eq!(encode_query_value("a=b?c#d+e"), "a%3Db%3Fc%23d%2Be");
}
