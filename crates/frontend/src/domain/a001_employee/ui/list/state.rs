use leptos::prelude::*;

pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Clone, Debug)]
pub struct EmployeeListState {
    pub page: u64,
    pub limit: u64,
    /// Committed search term (applied on submit, not per keystroke).
    pub search: String,
}

impl Default for EmployeeListState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }
}

impl EmployeeListState {
    /// Server-side search expression: `name:%term%` matches substrings
    /// of the name column.
    pub fn search_expression(&self) -> Option<String> {
        let term = self.search.trim();
        if term.is_empty() {
            None
        } else {
            Some(format!("name:%{}%", term))
        }
    }
}

pub fn create_state() -> RwSignal<EmployeeListState> {
    RwSignal::new(EmployeeListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_expression() {
        let mut state = EmployeeListState::default();
        assert_eq!(state.search_expression(), None);

        state.search = "  ".to_string();
        assert_eq!(state.search_expression(), None);

        state.search = "budi".to_string();
        assert_eq!(state.search_expression(), Some("name:%budi%".to_string()));
    }
}
