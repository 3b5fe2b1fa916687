use feedback_dashboard_shared::{FeedbackForm, FeedbackStatus, FormField};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeedbackFormFieldsProps {
    pub form: FeedbackForm,
    /// Edit dialog: name, email and message are shown but locked.
    #[prop_or(false)]
    pub details_readonly: bool,
    pub on_change: Callback<(FormField, String)>,
}

/// Reads `(field, value)` from whichever form element fired the event.
fn field_change<E: TargetCast>(event: &E) -> Option<(FormField, String)> {
    let (name, value) = if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
        (target.name(), target.value())
    } else if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
        (target.name(), target.value())
    } else if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
        (target.name(), target.value())
    } else {
        return None;
    };
    FormField::from_input_name(&name).map(|field| (field, value))
}

fn input_class(readonly: bool) -> Classes {
    let base = classes!(
        "mt-1",
        "block",
        "w-full",
        "border",
        "border-gray-300",
        "rounded-md",
        "px-3",
        "py-2",
        "focus:outline-none",
        "focus:ring-indigo-500",
        "focus:border-indigo-500",
        "text-sm"
    );
    if readonly {
        classes!(base, "bg-gray-100")
    } else {
        base
    }
}

#[function_component(FeedbackFormFields)]
pub fn feedback_form_fields(props: &FeedbackFormFieldsProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(change) = field_change(&event) {
                on_change.emit(change);
            }
        })
    };
    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(change) = field_change(&event) {
                on_change.emit(change);
            }
        })
    };

    let locked = props.details_readonly;
    let label_class = classes!("block", "text-sm", "font-medium", "text-gray-700");

    html! {
        <>
            <div>
                <label class={label_class.clone()}>{ "Name" }</label>
                <input
                    type="text"
                    name={FormField::Name.input_name()}
                    value={props.form.name.clone()}
                    oninput={on_input.clone()}
                    class={input_class(locked)}
                    required=true
                    disabled={locked}
                />
            </div>
            <div>
                <label class={label_class.clone()}>{ "Email" }</label>
                <input
                    type="email"
                    name={FormField::Email.input_name()}
                    value={props.form.email.clone()}
                    oninput={on_input.clone()}
                    class={input_class(locked)}
                    required=true
                    disabled={locked}
                />
            </div>
            <div>
                <label class={label_class.clone()}>{ "Message" }</label>
                <textarea
                    name={FormField::Message.input_name()}
                    value={props.form.message.clone()}
                    oninput={on_input}
                    rows="3"
                    class={input_class(locked)}
                    required=true
                    disabled={locked}
                />
            </div>
            <div>
                <label class={label_class}>{ "Status" }</label>
                <select
                    name={FormField::Status.input_name()}
                    onchange={on_select}
                    class={input_class(false)}
                >
                    { for FeedbackStatus::ALL.iter().map(|status| html! {
                        <option
                            value={status.as_str()}
                            selected={*status == props.form.status}
                        >
                            { status.label() }
                        </option>
                    }) }
                </select>
            </div>
        </>
    }
}
