//! Current-date helpers for default form values.
//!
//! Browser builds read the real clock through `js-sys`; elsewhere a fixed
//! epoch value keeps callers deterministic.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Today's month as `YYYY-MM`.
#[must_use]
pub fn current_month() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!("{:04}-{:02}", now.get_full_year(), now.get_month() + 1)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01".to_owned()
    }
}

/// Today's date as `YYYY-MM-DD`.
#[must_use]
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01".to_owned()
    }
}
