use super::*;

fn category(id: &str, name: &str, kind: FlowKind) -> Category {
    Category {
        id: id.to_owned(),
        name: name.to_owned(),
        kind,
    }
}

#[test]
fn default_state_is_unloaded_and_empty() {
    let state = CategoriesState::default();
    assert!(!state.loaded);
    assert!(state.items.is_empty());
}

#[test]
fn set_replaces_items_and_marks_loaded() {
    let mut state = CategoriesState::default();
    state.set(vec![category("c1", "Rent", FlowKind::Expense)]);
    assert!(state.loaded);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn name_of_finds_known_id() {
    let mut state = CategoriesState::default();
    state.set(vec![category("c1", "Rent", FlowKind::Expense)]);
    assert_eq!(state.name_of("c1"), Some("Rent"));
    assert_eq!(state.name_of("missing"), None);
}

#[test]
fn of_kind_filters_by_direction() {
    let mut state = CategoriesState::default();
    state.set(vec![
        category("c1", "Rent", FlowKind::Expense),
        category("c2", "Salary", FlowKind::Income),
        category("c3", "Groceries", FlowKind::Expense),
    ]);
    let expenses = state.of_kind(FlowKind::Expense);
    assert_eq!(expenses.len(), 2);
    assert!(expenses.iter().all(|c| c.kind == FlowKind::Expense));
}

#[test]
fn upsert_inserts_new_and_replaces_existing() {
    let mut state = CategoriesState::default();
    state.upsert(category("c1", "Rent", FlowKind::Expense));
    assert_eq!(state.items.len(), 1);

    state.upsert(category("c1", "Housing", FlowKind::Expense));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.name_of("c1"), Some("Housing"));
}

#[test]
fn remove_deletes_only_matching_id() {
    let mut state = CategoriesState::default();
    state.set(vec![
        category("c1", "Rent", FlowKind::Expense),
        category("c2", "Salary", FlowKind::Income),
    ]);
    state.remove("c1");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.name_of("c2"), Some("Salary"));
}
