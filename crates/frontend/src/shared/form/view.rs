use leptos::prelude::*;

use super::model::FormModel;
use super::state::FormPhase;
use super::view_model::FormViewModel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;

/// Standard create/edit page body for any [`FormModel`]: heading, the
/// field table of `M`, and save/cancel actions.
#[component]
pub fn RecordForm<M: FormModel>(vm: FormViewModel<M>) -> impl IntoView {
    let resource = M::RESOURCE;
    let title = if vm.state.with_untracked(|s| s.is_edit()) {
        format!("Edit {}", resource.singular())
    } else {
        format!("Create {}", resource.singular())
    };

    let fetching = move || vm.phase() == FormPhase::Fetching;
    let submitting = move || vm.phase() == FormPhase::Submitting;
    let load_error = move || match vm.phase() {
        FormPhase::LoadFailed(message) => Some(message),
        _ => None,
    };

    let fields = M::fields()
        .iter()
        .copied()
        .map(|spec| {
            let value = Signal::derive(move || vm.value(spec.name));
            let invalid = Signal::derive(move || vm.has_error(spec.name));
            let disabled = Signal::derive(move || vm.phase() != FormPhase::Ready);
            let on_input = Callback::new(move |v: String| vm.set_field(spec.name, v));
            let id = format!("{}-{}", resource.path(), spec.name);
            if spec.multiline {
                view! {
                    <Textarea
                        id=id
                        label=spec.label.to_string()
                        value=value
                        invalid=invalid
                        disabled=disabled
                        on_input=on_input
                    />
                }
                .into_any()
            } else {
                view! {
                    <Input
                        id=id
                        label=spec.label.to_string()
                        input_type=spec.input_type.to_string()
                        value=value
                        invalid=invalid
                        disabled=disabled
                        on_input=on_input
                    />
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <div class="page__header">
            <PageHeader title=title>
                <Button variant="secondary" on_click=Callback::new(move |_| vm.cancel())>
                    {icon("arrow-left")}
                    " Kembali"
                </Button>
            </PageHeader>
        </div>
        <div class="page__content">
            <Show when=move || load_error().is_some()>
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{move || load_error().unwrap_or_default()}</span>
                    <Button variant="secondary" size="sm" on_click=Callback::new(move |_| vm.load())>
                        {icon("refresh")}
                        " Coba lagi"
                    </Button>
                </div>
            </Show>
            <Show when=fetching>
                <div class="details-loading">"Loading..."</div>
            </Show>
            <form
                class="details-form"
                class:hidden=move || fetching() || load_error().is_some()
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.save();
                }
            >
                {fields}
                <div class="details-actions">
                    <Button button_type="submit" disabled=Signal::derive(submitting)>
                        {icon("save")}
                        {move || if submitting() { " Menyimpan..." } else { " Simpan" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
