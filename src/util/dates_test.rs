#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_month_falls_back_to_epoch_without_a_browser() {
    assert_eq!(current_month(), "1970-01");
}

#[test]
fn today_falls_back_to_epoch_without_a_browser() {
    assert_eq!(today(), "1970-01-01");
}
