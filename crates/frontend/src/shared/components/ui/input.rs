use leptos::prelude::*;

/// Labelled text input; `invalid` adds the error modifier
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "number", "password", "email", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                class:form__input--error=move || invalid.get().unwrap_or(false)
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                autocomplete=move || autocomplete.get().unwrap_or_default()
                aria-invalid=move || if invalid.get().unwrap_or(false) { "true" } else { "false" }
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
