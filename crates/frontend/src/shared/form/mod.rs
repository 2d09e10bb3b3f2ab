//! Create/edit form machinery shared by every resource.
//!
//! - model.rs: `FormModel`, the per-resource field table
//! - state.rs: `FormState` transitions and the load/submit calls
//! - command.rs: `UiCommand`s the transitions emit
//! - dispatch.rs: `UiDispatcher`, which performs them in the browser
//! - view_model.rs / view.rs: the page-level wiring and `RecordForm`

pub mod command;
pub mod dispatch;
pub mod model;
pub mod state;
pub mod view;
pub mod view_model;

pub use command::{
    error_commands, expired_session_commands, Notification, NotificationKind, UiCommand,
    LOGIN_ROUTE,
};
pub use dispatch::UiDispatcher;
pub use model::{FieldSpec, FormModel};
pub use state::{load_record, submit_form, FormPhase, FormState};
pub use view::RecordForm;
pub use view_model::FormViewModel;
