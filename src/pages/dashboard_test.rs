use super::*;

#[test]
fn negative_balance_gets_the_red_accent() {
    assert_eq!(balance_accent(-1), "summary-card--negative");
}

#[test]
fn zero_and_positive_balances_get_the_green_accent() {
    assert_eq!(balance_accent(0), "summary-card--positive");
    assert_eq!(balance_accent(123_456), "summary-card--positive");
}
