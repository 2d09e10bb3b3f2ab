/// List page helpers: sorting, search and the load/delete state machine
use serde_json::Value;
use std::cmp::Ordering;

use crate::shared::form::{error_commands, Notification, UiCommand};
use crate::shared::service::client::DEFAULT_DELETED_MESSAGE;
use crate::shared::service::{
    mutation_message, HttpTransport, Resource, ServiceClient, ServiceResult,
};
use crate::system::auth::storage::SessionStore;

/// Rows that can be matched against a search query
pub trait Searchable {
    /// `filter` is already lowercased and trimmed
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Rows that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Case-insensitive text comparison
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Compare numeric text numerically; non-numbers (NaN and infinities
/// included) sort after numbers
pub fn cmp_numeric(a: &str, b: &str) -> Ordering {
    match (parse_finite(a), parse_finite(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => cmp_text(a, b),
    }
}

/// Sort column and direction of a list page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    /// Same column flips direction; a new column starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }
}

/// Rows of a list page with its loading flag, search query and sort column
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<R> {
    pub items: Vec<R>,
    pub loading: bool,
    pub search_query: String,
    pub sort: SortState,
}

impl<R> ListState<R> {
    pub fn new(sort_field: &str) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            search_query: String::new(),
            sort: SortState::new(sort_field),
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// On failure the previous rows stay in place
    pub fn apply_loaded(&mut self, result: ServiceResult<Vec<R>>) -> Vec<UiCommand> {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                Vec::new()
            }
            Err(e) => error_commands(&e),
        }
    }
}

impl<R: Clone + Searchable + Sortable> ListState<R> {
    /// Rows matching the search query, in the current sort order
    pub fn visible_rows(&self) -> Vec<R> {
        let mut rows = filter_list(self.items.clone(), &self.search_query);
        sort_list(&mut rows, &self.sort.field, self.sort.ascending);
        rows
    }
}

/// Commands after a delete; the list should be refetched when the
/// returned flag is true
pub fn delete_outcome(result: ServiceResult<Value>) -> (Vec<UiCommand>, bool) {
    match result {
        Ok(data) => (
            vec![UiCommand::Notify(Notification::success(mutation_message(
                &data,
                DEFAULT_DELETED_MESSAGE,
            )))],
            true,
        ),
        Err(e) => (error_commands(&e), false),
    }
}

pub async fn delete_record<T, S>(
    client: &ServiceClient<T, S>,
    resource: Resource,
    id: &str,
) -> ServiceResult<Value>
where
    T: HttpTransport,
    S: SessionStore,
{
    client.delete(resource, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::service::testing::{block_on, FakeTransport};
    use crate::shared::service::{Method, ServiceError};
    use crate::system::auth::storage::MemorySession;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, &'static str);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(self.0, other.0),
                "price" => cmp_numeric(self.1, other.1),
                _ => Ordering::Equal,
            }
        }
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(filter)
        }
    }

    #[test]
    fn test_numeric_sort() {
        let mut rows = vec![Row("a", "10"), Row("b", "9.5"), Row("c", "n/a")];
        sort_list(&mut rows, "price", true);
        assert_eq!(rows[0].1, "9.5");
        assert_eq!(rows[2].1, "n/a");
        sort_list(&mut rows, "price", false);
        assert_eq!(rows[0].1, "n/a");
    }

    #[test]
    fn test_numeric_sort_with_non_finite_prices() {
        let prices = ["3", "NaN", "1.5", "inf", "abc", "-2"];
        let mut rows: Vec<Row> = (0..40)
            .map(|i| Row("x", prices[i % prices.len()]))
            .collect();

        sort_list(&mut rows, "price", true);
        let numeric = rows.iter().take_while(|r| parse_finite(r.1).is_some()).count();
        assert_eq!(numeric, rows.iter().filter(|r| parse_finite(r.1).is_some()).count());
        assert_eq!(rows[0].1, "-2");
        assert!(rows[numeric..].iter().all(|r| parse_finite(r.1).is_none()));

        sort_list(&mut rows, "price", false);
        assert_eq!(rows[rows.len() - 1].1, "-2");
    }

    #[test]
    fn test_nan_is_not_equal_to_numbers() {
        assert_eq!(cmp_numeric("NaN", "1"), Ordering::Greater);
        assert_eq!(cmp_numeric("1", "NaN"), Ordering::Less);
        assert_eq!(cmp_numeric("NaN", "NaN"), Ordering::Equal);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![Row("Blue Mug", "1"), Row("Red Cup", "2")];
        assert_eq!(filter_list(rows.clone(), "  MUG ").len(), 1);
        assert_eq!(filter_list(rows, "").len(), 2);
    }

    #[test]
    fn test_sort_toggle() {
        let mut sort = SortState::new("name");
        sort.toggle("name");
        assert!(!sort.ascending);
        sort.toggle("price");
        assert_eq!(sort, SortState::new("price"));
    }

    #[test]
    fn test_failed_reload_keeps_rows() {
        let mut state = ListState::new("name");
        state.items = vec![Row("a", "1")];
        state.begin_load();
        let commands = state.apply_loaded(Err(ServiceError::Network("offline".into())));
        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn test_visible_rows_filter_then_sort() {
        let mut state = ListState::new("name");
        state.items = vec![Row("mug b", "2"), Row("plate", "1"), Row("Mug a", "3")];
        state.search_query = "mug".into();
        let rows = state.visible_rows();
        assert_eq!(rows, vec![Row("Mug a", "3"), Row("mug b", "2")]);

        state.sort.toggle("price");
        state.sort.toggle("price");
        assert_eq!(state.visible_rows()[0].1, "3");
    }

    #[test]
    fn test_delete_success_uses_server_message() {
        let transport = FakeTransport::new();
        transport.respond(
            Method::Delete,
            "http://api.test/product/3",
            200,
            r#"{"data":{"message":"Product deleted"}}"#,
        );
        let client = ServiceClient::new(transport, MemorySession::with_token("t"), "http://api.test");

        let (commands, refetch) =
            delete_outcome(block_on(delete_record(&client, Resource::Product, "3")));
        assert!(refetch);
        assert_eq!(
            commands,
            vec![UiCommand::Notify(Notification::success("Product deleted"))]
        );
    }

    #[test]
    fn test_delete_expired_session() {
        let (commands, refetch) = delete_outcome(Err(ServiceError::TokenExpired));
        assert!(!refetch);
        assert_eq!(commands[0], UiCommand::ClearSession);
    }
}
