//! Navigation: the five routes and how a user's selection maps onto them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    List,
    Create,
    Find,
    Delete,
}

impl Route {
    /// Menu order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::List,
        Route::Create,
        Route::Find,
        Route::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::List => "Customer list",
            Route::Create => "Add a customer",
            Route::Find => "Find a customer",
            Route::Delete => "Delete a customer",
        }
    }

    /// Short name, also the CLI subcommand.
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::List => "list",
            Route::Create => "create",
            Route::Find => "find",
            Route::Delete => "delete",
        }
    }

    /// Accepts a 1-based menu index, the short name, or the full label
    /// (case-insensitive, surrounding whitespace ignored).
    pub fn from_selection(input: &str) -> Option<Route> {
        let input = input.trim();
        if let Ok(index) = input.parse::<usize>() {
            return index.checked_sub(1).and_then(|i| Route::ALL.get(i).copied());
        }
        Route::ALL.into_iter().find(|route| {
            route.name().eq_ignore_ascii_case(input) || route.label().eq_ignore_ascii_case(input)
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_has_five_routes_in_order() {
        let names: Vec<_> = Route::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["home", "list", "create", "find", "delete"]);
    }

    #[test]
    fn selects_by_index() {
        assert_eq!(Route::from_selection("1"), Some(Route::Home));
        assert_eq!(Route::from_selection(" 5 "), Some(Route::Delete));
        assert_eq!(Route::from_selection("0"), None);
        assert_eq!(Route::from_selection("6"), None);
    }

    #[test]
    fn selects_by_name_or_label() {
        assert_eq!(Route::from_selection("FIND"), Some(Route::Find));
        assert_eq!(Route::from_selection("customer list"), Some(Route::List));
        assert_eq!(Route::from_selection("Add a customer"), Some(Route::Create));
        assert_eq!(Route::from_selection("update"), None);
    }
}
