use leptos::prelude::*;

/// Generic form field component with label, validation error slot and blur hook
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Form control name, also used as the element id
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Blur event callback, fired when the field loses focus
    on_blur: Callback<()>,
    /// Validation error to display under the field
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                id=name
                name=name
                class="input-base"
                class:border-red-500=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            {move || {
                error.get().map(|err| view! {
                    <div class="flex items-center gap-1 text-sm text-theme-error">
                        <span aria-hidden="true">"⚠"</span>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    label: String,
    /// Form control name, also used as the element id
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Blur event callback, fired when the field loses focus
    on_blur: Callback<()>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Validation error to display under the field
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                id=name
                name=name
                class="input-base resize-none"
                class:border-red-500=move || error.get().is_some()
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            {move || {
                error.get().map(|err| view! {
                    <div class="flex items-center gap-1 text-sm text-theme-error">
                        <span aria-hidden="true">"⚠"</span>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
