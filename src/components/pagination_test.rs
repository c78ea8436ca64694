use super::*;

#[test]
fn single_page_has_no_window() {
    assert_eq!(page_window(1, 1, 5), Vec::<u32>::new());
    assert_eq!(page_window(1, 0, 5), Vec::<u32>::new());
}

#[test]
fn zero_width_has_no_window() {
    assert_eq!(page_window(1, 10, 0), Vec::<u32>::new());
}

#[test]
fn window_centers_on_current_page() {
    assert_eq!(page_window(5, 9, 5), vec![3, 4, 5, 6, 7]);
}

#[test]
fn window_clamps_at_the_start() {
    assert_eq!(page_window(1, 9, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(2, 9, 5), vec![1, 2, 3, 4, 5]);
}

#[test]
fn window_clamps_at_the_end() {
    assert_eq!(page_window(9, 9, 5), vec![5, 6, 7, 8, 9]);
    assert_eq!(page_window(8, 9, 5), vec![5, 6, 7, 8, 9]);
}

#[test]
fn window_shrinks_when_fewer_pages_than_width() {
    assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
}
