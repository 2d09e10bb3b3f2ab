use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::form::{UiCommand, UiDispatcher};
use crate::shared::lifetime::PageLifetime;
use crate::shared::list_utils::{
    delete_outcome, delete_record, get_sort_indicator, ListState, Searchable, Sortable,
};
use crate::shared::service::{app_client, Resource};

/// Table row of a list page, built from the API record
pub trait ListRow: Clone + Searchable + Sortable + Send + Sync + 'static {
    type Record: DeserializeOwned + Into<Self>;
    const RESOURCE: Resource;
    const DEFAULT_SORT: &'static str;

    fn id(&self) -> &str;

    /// Name shown in the delete confirmation
    fn label(&self) -> &str;
}

/// Drives a list page: fetch, search, sort, delete.
pub struct ListViewModel<R: ListRow> {
    pub state: RwSignal<ListState<R>>,
    lifetime: StoredValue<PageLifetime>,
    dispatcher: StoredValue<UiDispatcher, LocalStorage>,
}

impl<R: ListRow> Clone for ListViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListRow> Copy for ListViewModel<R> {}

impl<R: ListRow> ListViewModel<R> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ListState::new(R::DEFAULT_SORT)),
            lifetime: StoredValue::new(PageLifetime::for_current_owner()),
            dispatcher: StoredValue::new_local(UiDispatcher::new()),
        }
    }

    pub fn rows(&self) -> Vec<R> {
        self.state.with(|s| s.visible_rows())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn set_search(&self, query: String) {
        self.state.update(|s| s.search_query = query);
    }

    pub fn toggle_sort(&self, field: &str) {
        self.state.update(|s| s.sort.toggle(field));
    }

    pub fn sort_indicator(&self, field: &str) -> &'static str {
        self.state
            .with(|s| get_sort_indicator(&s.sort.field, field, s.sort.ascending))
    }

    pub fn fetch(&self) {
        self.state.update(|s| s.begin_load());
        let this = *self;
        let lifetime = self.lifetime.get_value();
        spawn_local(async move {
            let result = app_client()
                .list_as::<R::Record>(R::RESOURCE)
                .await
                .map(|records| records.into_iter().map(Into::into).collect());
            if !lifetime.is_alive() {
                return;
            }
            let commands = this
                .state
                .try_update(|s| s.apply_loaded(result))
                .unwrap_or_default();
            this.run(commands);
        });
    }

    /// Ask for confirmation, delete, then refetch on success
    pub fn delete(&self, row: &R) {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Hapus \"{}\"?", row.label()))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let id = row.id().to_string();
        let this = *self;
        let lifetime = self.lifetime.get_value();
        spawn_local(async move {
            let result = delete_record(&app_client(), R::RESOURCE, &id).await;
            if !lifetime.is_alive() {
                return;
            }
            let (commands, refetch) = delete_outcome(result);
            this.run(commands);
            if refetch {
                this.fetch();
            }
        });
    }

    pub fn open_create(&self) {
        self.navigate(R::RESOURCE.create_route());
    }

    pub fn open_edit(&self, id: &str) {
        self.navigate(R::RESOURCE.edit_route(id));
    }

    fn navigate(&self, path: String) {
        self.dispatcher.with_value(|d| d.navigate(&path));
    }

    fn run(&self, commands: Vec<UiCommand>) {
        let _ = self.dispatcher.try_with_value(|d| d.run(commands));
    }
}
