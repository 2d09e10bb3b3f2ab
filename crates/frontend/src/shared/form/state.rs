use std::collections::BTreeSet;

use super::command::{error_commands, Notification, UiCommand};
use super::model::FormModel;
use crate::shared::service::client::DEFAULT_SAVED_MESSAGE;
use crate::shared::service::{
    mutation_message, HttpTransport, Payload, ServiceClient, ServiceError, ServiceResult,
};
use crate::system::auth::storage::SessionStore;

/// Lifecycle of a create/edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    /// Record is being loaded by id
    Fetching,
    /// Initial load failed; the form offers a retry
    LoadFailed(String),
    Ready,
    Submitting,
}

/// Local state of one form page
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<M> {
    pub record_id: Option<String>,
    pub phase: FormPhase,
    pub values: M,
    errors: BTreeSet<String>,
}

impl<M: FormModel> FormState<M> {
    /// Empty form, ready for input
    pub fn for_create() -> Self {
        Self {
            record_id: None,
            phase: FormPhase::Ready,
            values: M::default(),
            errors: BTreeSet::new(),
        }
    }

    /// Form waiting for the record `id`
    pub fn for_edit(id: impl Into<String>) -> Self {
        Self {
            record_id: Some(id.into()),
            phase: FormPhase::Fetching,
            values: M::default(),
            errors: BTreeSet::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.record_id.is_some()
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == FormPhase::Fetching
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains(field)
    }

    pub fn error_fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(String::as_str)
    }

    /// Enter `Fetching` and return the id to load, if a load is due
    pub fn begin_fetch(&mut self) -> Option<String> {
        match self.phase {
            FormPhase::Fetching | FormPhase::LoadFailed(_) => {
                let id = self.record_id.clone()?;
                self.phase = FormPhase::Fetching;
                Some(id)
            }
            FormPhase::Ready | FormPhase::Submitting => None,
        }
    }

    pub fn apply_loaded(&mut self, result: ServiceResult<M::Record>) -> Vec<UiCommand> {
        match result {
            Ok(record) => {
                self.values = record.into();
                self.errors.clear();
                self.phase = FormPhase::Ready;
                Vec::new()
            }
            Err(e) => {
                self.phase = FormPhase::LoadFailed(e.user_message());
                error_commands(&e)
            }
        }
    }

    /// Change one field and clear its error flag
    pub fn edit(&mut self, field: &str, value: String) {
        if self.is_fetching() {
            return;
        }
        self.values.set(field, value);
        self.errors.remove(field);
    }

    /// `Ready` → `Submitting`. Returns false when a submit is not possible,
    /// e.g. one is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != FormPhase::Ready {
            return false;
        }
        self.phase = FormPhase::Submitting;
        true
    }

    /// Apply the outcome of a submit. `Ok` carries the server message.
    pub fn apply_submitted(&mut self, result: ServiceResult<String>) -> Vec<UiCommand> {
        self.phase = FormPhase::Ready;
        match result {
            Ok(message) => vec![
                UiCommand::Notify(Notification::success(message)),
                UiCommand::Navigate(M::RESOURCE.list_route()),
            ],
            Err(e) => {
                if let ServiceError::Validation(fields) = &e {
                    for (field, _) in fields.iter() {
                        self.errors.insert(field.to_string());
                    }
                }
                error_commands(&e)
            }
        }
    }
}

/// Load the record behind an edit form
pub async fn load_record<T, S, M>(client: &ServiceClient<T, S>, id: &str) -> ServiceResult<M::Record>
where
    T: HttpTransport,
    S: SessionStore,
    M: FormModel,
{
    client.show_as::<M::Record>(M::RESOURCE, id).await
}

/// Send the form: update when editing, create otherwise
pub async fn submit_form<T, S, M>(
    client: &ServiceClient<T, S>,
    record_id: Option<&str>,
    values: &M,
) -> ServiceResult<String>
where
    T: HttpTransport,
    S: SessionStore,
    M: FormModel,
{
    let payload = Payload::form(values)?;
    let data = match record_id {
        Some(id) => client.update(M::RESOURCE, id, payload).await?,
        None => client.create(M::RESOURCE, payload).await?,
    };
    Ok(mutation_message(&data, DEFAULT_SAVED_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::model::FieldSpec;
    use crate::shared::service::Resource;
    use contracts::shared::api::FieldErrors;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct NoteForm {
        title: String,
        body: String,
    }

    impl FormModel for NoteForm {
        type Record = NoteForm;
        const RESOURCE: Resource = Resource::ProductCategory;

        fn fields() -> &'static [FieldSpec] {
            const FIELDS: &[FieldSpec] = &[
                FieldSpec::text("title", "Title"),
                FieldSpec::textarea("body", "Body"),
            ];
            FIELDS
        }

        fn get(&self, field: &str) -> String {
            match field {
                "title" => self.title.clone(),
                "body" => self.body.clone(),
                _ => String::new(),
            }
        }

        fn set(&mut self, field: &str, value: String) {
            match field {
                "title" => self.title = value,
                "body" => self.body = value,
                _ => {}
            }
        }
    }

    fn ready() -> FormState<NoteForm> {
        FormState::for_create()
    }

    #[test]
    fn test_create_starts_ready_edit_starts_fetching() {
        assert_eq!(ready().phase, FormPhase::Ready);
        assert!(ready().begin_fetch().is_none());

        let mut edit = FormState::<NoteForm>::for_edit("7");
        assert!(edit.is_fetching());
        assert_eq!(edit.begin_fetch().as_deref(), Some("7"));
    }

    #[test]
    fn test_load_failure_allows_retry() {
        let mut form = FormState::<NoteForm>::for_edit("7");
        let commands = form.apply_loaded(Err(ServiceError::Api("Data tidak ditemukan".into())));
        assert_eq!(form.phase, FormPhase::LoadFailed("Data tidak ditemukan".into()));
        assert_eq!(
            commands,
            vec![UiCommand::Notify(Notification::error("Data tidak ditemukan"))]
        );

        assert_eq!(form.begin_fetch().as_deref(), Some("7"));
        assert!(form.is_fetching());
    }

    #[test]
    fn test_edits_ignored_while_fetching() {
        let mut form = FormState::<NoteForm>::for_edit("7");
        form.edit("title", "x".into());
        assert_eq!(form.values.title, "");
    }

    #[test]
    fn test_second_submit_is_ignored() {
        let mut form = ready();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_validation_flags_accumulate_and_edit_clears() {
        let mut form = ready();
        form.begin_submit();
        form.apply_submitted(Err(ServiceError::Validation(
            FieldErrors::new().with("title", &["Title is required"]),
        )));
        assert!(form.has_error("title"));

        form.begin_submit();
        form.apply_submitted(Err(ServiceError::Validation(
            FieldErrors::new().with("body", &["Body is required"]),
        )));
        assert!(form.has_error("title"));
        assert!(form.has_error("body"));

        form.edit("title", "Hello".into());
        assert!(!form.has_error("title"));
        assert!(form.has_error("body"));
        assert_eq!(form.phase, FormPhase::Ready);
    }

    #[test]
    fn test_flat_error_flags_nothing() {
        let mut form = ready();
        form.begin_submit();
        let commands = form.apply_submitted(Err(ServiceError::Api("Server busy".into())));
        assert_eq!(form.error_fields().count(), 0);
        assert_eq!(
            commands,
            vec![UiCommand::Notify(Notification::error("Server busy"))]
        );
    }

    #[test]
    fn test_success_returns_to_list() {
        let mut form = ready();
        form.begin_submit();
        let commands = form.apply_submitted(Ok("Saved".into()));
        assert_eq!(
            commands,
            vec![
                UiCommand::Notify(Notification::success("Saved")),
                UiCommand::Navigate("/product-categories".into()),
            ]
        );
    }
}
