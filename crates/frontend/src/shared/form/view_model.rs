use leptos::prelude::*;
use leptos::task::spawn_local;

use super::dispatch::UiDispatcher;
use super::model::FormModel;
use super::state::{load_record, submit_form, FormPhase, FormState};
use crate::shared::lifetime::PageLifetime;
use crate::shared::service::app_client;

/// Drives one create/edit page: owns its [`FormState`] and runs the
/// load and save requests against it.
///
/// `Copy`, so it can be captured by reactive closures and callbacks.
pub struct FormViewModel<M: FormModel> {
    pub state: RwSignal<FormState<M>>,
    lifetime: StoredValue<PageLifetime>,
    dispatcher: StoredValue<UiDispatcher, LocalStorage>,
}

impl<M: FormModel> Clone for FormViewModel<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: FormModel> Copy for FormViewModel<M> {}

impl<M: FormModel> FormViewModel<M> {
    /// Edit form for `id`, or an empty create form. Must run inside the
    /// page component.
    pub fn new(id: Option<String>) -> Self {
        let state = match id {
            Some(id) => FormState::for_edit(id),
            None => FormState::for_create(),
        };
        Self {
            state: RwSignal::new(state),
            lifetime: StoredValue::new(PageLifetime::for_current_owner()),
            dispatcher: StoredValue::new_local(UiDispatcher::new()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.state.with(|s| s.is_edit())
    }

    pub fn phase(&self) -> FormPhase {
        self.state.with(|s| s.phase.clone())
    }

    pub fn value(&self, field: &str) -> String {
        self.state.with(|s| s.values.get(field))
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.state.with(|s| s.has_error(field))
    }

    pub fn set_field(&self, field: &str, value: String) {
        self.state.update(|s| s.edit(field, value));
    }

    /// Fetch the record (initially or as a retry). No-op on create forms.
    pub fn load(&self) {
        let Some(id) = self.state.try_update(|s| s.begin_fetch()).flatten() else {
            return;
        };
        let this = *self;
        let lifetime = self.lifetime.get_value();
        spawn_local(async move {
            let result = load_record::<_, _, M>(&app_client(), &id).await;
            if !lifetime.is_alive() {
                log::debug!("{} {} loaded after unmount", M::RESOURCE.path(), id);
                return;
            }
            let commands = this
                .state
                .try_update(|s| s.apply_loaded(result))
                .unwrap_or_default();
            this.run(commands);
        });
    }

    /// Submit the form; ignored while a submit is in flight.
    pub fn save(&self) {
        if !self.state.try_update(|s| s.begin_submit()).unwrap_or(false) {
            return;
        }
        let (record_id, values) = self
            .state
            .with_untracked(|s| (s.record_id.clone(), s.values.clone()));
        let this = *self;
        let lifetime = self.lifetime.get_value();
        spawn_local(async move {
            let result = submit_form(&app_client(), record_id.as_deref(), &values).await;
            if !lifetime.is_alive() {
                return;
            }
            let commands = this
                .state
                .try_update(|s| s.apply_submitted(result))
                .unwrap_or_default();
            this.run(commands);
        });
    }

    pub fn cancel(&self) {
        self.dispatcher
            .with_value(|d| d.navigate(&M::RESOURCE.list_route()));
    }

    fn run(&self, commands: Vec<super::UiCommand>) {
        // The dispatcher is gone once the page is disposed
        let _ = self.dispatcher.try_with_value(|d| d.run(commands));
    }
}
