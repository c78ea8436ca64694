use super::*;

fn budget(id: &str, category_id: &str, amount: i64, month: &str) -> Budget {
    Budget {
        id: id.to_owned(),
        category_id: category_id.to_owned(),
        amount,
        month: month.to_owned(),
    }
}

fn expense(id: &str, amount: i64, category_id: &str, date: &str) -> Transaction {
    Transaction {
        id: id.to_owned(),
        title: format!("tx {id}"),
        amount,
        category_id: category_id.to_owned(),
        note: None,
        date: date.to_owned(),
    }
}

// =============================================================
// BudgetProgress
// =============================================================

#[test]
fn percent_scales_spend_against_limit() {
    let progress = BudgetProgress { spent: 2500, limit: 10_000 };
    assert_eq!(progress.percent(), 25);
}

#[test]
fn percent_clamps_overspend_to_100() {
    let progress = BudgetProgress { spent: 15_000, limit: 10_000 };
    assert_eq!(progress.percent(), 100);
    assert!(progress.over());
}

#[test]
fn percent_with_zero_limit_reads_fully_consumed() {
    let progress = BudgetProgress { spent: 0, limit: 0 };
    assert_eq!(progress.percent(), 100);
}

#[test]
fn remaining_never_goes_negative() {
    let under = BudgetProgress { spent: 4000, limit: 10_000 };
    assert_eq!(under.remaining(), 6000);
    let over = BudgetProgress { spent: 12_000, limit: 10_000 };
    assert_eq!(over.remaining(), 0);
}

// =============================================================
// spent_against
// =============================================================

#[test]
fn spent_against_counts_matching_category_and_month() {
    let b = budget("b1", "c-rent", 130_000, "2026-03");
    let expenses = vec![
        expense("e1", 125_000, "c-rent", "2026-03-01"),
        expense("e2", 3_000, "c-rent", "2026-03-20"),
        expense("e3", 9_999, "c-rent", "2026-02-28"),
        expense("e4", 5_000, "c-food", "2026-03-02"),
    ];
    assert_eq!(spent_against(&b, &expenses), 128_000);
}

#[test]
fn spent_against_is_zero_with_no_matches() {
    let b = budget("b1", "c-rent", 130_000, "2026-03");
    assert_eq!(spent_against(&b, &[]), 0);
}

// =============================================================
// BudgetsState
// =============================================================

#[test]
fn set_records_month_and_marks_loaded() {
    let mut state = BudgetsState::default();
    state.set("2026-03".to_owned(), vec![budget("b1", "c1", 100, "2026-03")]);
    assert!(state.loaded);
    assert_eq!(state.month, "2026-03");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn upsert_replaces_budget_for_same_category() {
    let mut state = BudgetsState::default();
    state.upsert(budget("b1", "c1", 100, "2026-03"));
    state.upsert(budget("b2", "c1", 250, "2026-03"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].amount, 250);
}

#[test]
fn upsert_keeps_budgets_for_other_categories() {
    let mut state = BudgetsState::default();
    state.upsert(budget("b1", "c1", 100, "2026-03"));
    state.upsert(budget("b2", "c2", 200, "2026-03"));
    assert_eq!(state.items.len(), 2);
}

#[test]
fn remove_deletes_by_budget_id() {
    let mut state = BudgetsState::default();
    state.upsert(budget("b1", "c1", 100, "2026-03"));
    state.remove("b1");
    assert!(state.items.is_empty());
}
