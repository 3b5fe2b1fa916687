use feedback_dashboard_shared::{
    dashboard::{DashboardAction, Modal as OpenModal},
    Feedback, FormField, StatusFilter,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    api::{
        create_feedback, fetch_feedback_summary, fetch_feedbacks, log_error,
        update_feedback_status,
    },
    components::{
        feedback_form::FeedbackFormFields,
        feedback_table::FeedbackTable,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::Modal,
        toast::ToastBanner,
    },
    state::{DashboardHandle, DashboardStore},
};

fn primary_button() -> Classes {
    classes!(
        "px-4",
        "py-2",
        "bg-indigo-600",
        "border",
        "border-transparent",
        "rounded-md",
        "text-sm",
        "font-medium",
        "text-white",
        "hover:bg-indigo-700",
        "transition-colors",
        "disabled:opacity-50"
    )
}

fn secondary_button() -> Classes {
    classes!(
        "px-4",
        "py-2",
        "border",
        "border-gray-300",
        "rounded-md",
        "text-sm",
        "font-medium",
        "text-gray-700",
        "hover:bg-gray-50",
        "transition-colors"
    )
}

fn summary_details(state: &DashboardHandle, on_close: Callback<MouseEvent>) -> Html {
    let Some(feedback) = state.selected.clone() else {
        return Html::default();
    };

    html! {
        <div class="space-y-4">
            <div class={classes!("bg-gray-50", "p-4", "rounded-lg")}>
                <h4 class={classes!("font-medium", "text-gray-900", "mb-2")}>{ "Original Feedback" }</h4>
                <p class={classes!("text-sm", "text-gray-600", "mb-1")}>
                    <strong>{ "From: " }</strong>{ format!("{} ({})", feedback.name, feedback.email) }
                </p>
                <p class={classes!("text-sm", "text-gray-600", "mb-1")}>
                    <strong>{ "Message: " }</strong>{ feedback.message.clone() }
                </p>
                <p class={classes!("text-sm", "text-gray-600")}>
                    <strong>{ "Status: " }</strong>{ feedback.status.as_str() }
                </p>
            </div>

            <div class={classes!("bg-gradient-to-r", "from-green-50", "to-blue-50", "p-4", "rounded-lg")}>
                <h4 class={classes!("font-medium", "text-gray-900", "mb-2")}>{ "🤖 AI Analysis" }</h4>
                <p class={classes!("text-sm", "text-gray-700", "leading-relaxed", "whitespace-pre-line")}>
                    { state.summary_text().to_string() }
                </p>
            </div>

            <div class={classes!("flex", "justify-end", "pt-4")}>
                <button
                    type="button"
                    onclick={on_close}
                    class={classes!(
                        "px-4",
                        "py-2",
                        "bg-gray-600",
                        "border",
                        "border-transparent",
                        "rounded-md",
                        "text-sm",
                        "font-medium",
                        "text-white",
                        "hover:bg-gray-700",
                        "transition-colors"
                    )}
                >
                    { "Close" }
                </button>
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_reducer(DashboardStore::default);
    let saving = use_state(|| false);
    // Request sequence guard so a late summary never lands in a newer dialog.
    let summary_seq = use_mut_ref(|| 0_u64);

    let refresh = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| {
            let dispatcher = dispatcher.clone();
            dispatcher.dispatch(DashboardAction::FetchStarted);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_feedbacks().await {
                    Ok(feedbacks) => {
                        dispatcher.dispatch(DashboardAction::FetchSucceeded(feedbacks));
                    },
                    Err(err) => {
                        log_error("Error fetching feedbacks", &err);
                        dispatcher.dispatch(DashboardAction::FetchFailed);
                    },
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_filter_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                let filter = StatusFilter::from_select_value(&target.value());
                dispatcher.dispatch(DashboardAction::SetFilter(filter));
            }
        })
    };

    let on_open_create = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DashboardAction::OpenCreate))
    };

    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::CloseModal))
    };
    let on_close_click = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_form_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (FormField, String)| {
            dispatcher.dispatch(DashboardAction::UpdateForm(field, value));
        })
    };

    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |feedback: Feedback| {
            dispatcher.dispatch(DashboardAction::OpenEdit(feedback));
        })
    };

    let on_summary = {
        let dispatcher = state.dispatcher();
        let summary_seq = summary_seq.clone();
        Callback::from(move |feedback: Feedback| {
            let request = {
                let mut seq = summary_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            let message = feedback.message.clone();
            dispatcher.dispatch(DashboardAction::OpenSummary {
                feedback,
                request,
            });
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let text = fetch_feedback_summary(&message).await;
                dispatcher.dispatch(DashboardAction::SummaryReady {
                    request,
                    text,
                });
            });
        })
    };

    let on_create_submit = {
        let state = state.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            if *saving {
                return;
            }
            let body = state.form.to_new_feedback();
            let dispatcher = state.dispatcher();
            let saving = saving.clone();
            let refresh = refresh.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match create_feedback(&body).await {
                    Ok(()) => {
                        dispatcher.dispatch(DashboardAction::CreateSucceeded);
                        refresh.emit(());
                    },
                    Err(err) => {
                        log_error("Error creating feedback", &err);
                        dispatcher.dispatch(DashboardAction::CreateFailed);
                    },
                }
                saving.set(false);
            });
        })
    };

    let on_update_submit = {
        let state = state.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            if *saving {
                return;
            }
            let Some(editing) = state.editing.clone() else {
                return;
            };
            let status = state.form.status;
            let dispatcher = state.dispatcher();
            let saving = saving.clone();
            let refresh = refresh.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match update_feedback_status(editing.id, status).await {
                    Ok(()) => {
                        dispatcher.dispatch(DashboardAction::UpdateSucceeded);
                        refresh.emit(());
                    },
                    Err(err) => {
                        log_error("Error updating feedback status", &err);
                        dispatcher.dispatch(DashboardAction::UpdateFailed);
                    },
                }
                saving.set(false);
            });
        })
    };

    let on_toast_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(DashboardAction::DismissToast(id)))
    };

    let toast = state.toast.clone().map(|toast| {
        let key = toast.id;
        html! { <ToastBanner key={key} toast={toast} on_close={on_toast_close.clone()} /> }
    });

    if state.show_initial_loader() {
        return html! {
            <>
                { for toast }
                <LoadingSpinner fullscreen=true label={AttrValue::from("Loading feedbacks...")} />
            </>
        };
    }

    let visible = state.visible();
    let filter = state.status_filter;

    html! {
        <div class={classes!("min-h-screen", "bg-gray-50", "p-4", "sm:p-8")}>
            { for toast }
            <div class={classes!("max-w-7xl", "mx-auto")}>
                <div class={classes!("flex", "flex-col", "sm:flex-row", "justify-between", "items-start", "sm:items-center", "mb-6", "gap-4")}>
                    <div class={classes!("flex", "items-center", "gap-3")}>
                        <h1 class={classes!("text-2xl", "sm:text-3xl", "font-bold", "text-gray-900")}>
                            { "Feedback Viewer Dashboard" }
                        </h1>
                        if state.loading {
                            <LoadingSpinner size={SpinnerSize::Small} />
                        }
                    </div>
                    <div class={classes!("flex", "flex-col", "sm:flex-row", "items-start", "sm:items-center", "gap-3", "w-full", "sm:w-auto")}>
                        <button
                            type="button"
                            onclick={on_open_create}
                            class={classes!(
                                "w-full",
                                "sm:w-auto",
                                "bg-indigo-600",
                                "hover:bg-indigo-700",
                                "text-white",
                                "px-4",
                                "py-2",
                                "rounded-md",
                                "text-sm",
                                "font-medium",
                                "transition-colors"
                            )}
                        >
                            { "Add Feedback" }
                        </button>
                        <div class={classes!("flex", "items-center", "gap-2", "w-full", "sm:w-auto")}>
                            <label for="status-filter" class={classes!("text-sm", "font-medium", "text-gray-700", "whitespace-nowrap")}>
                                { "Filter by Status:" }
                            </label>
                            <select
                                id="status-filter"
                                onchange={on_filter_change}
                                class={classes!(
                                    "block",
                                    "w-full",
                                    "px-3",
                                    "py-2",
                                    "border",
                                    "border-gray-300",
                                    "rounded-md",
                                    "shadow-sm",
                                    "focus:outline-none",
                                    "focus:ring-indigo-500",
                                    "focus:border-indigo-500",
                                    "text-sm"
                                )}
                            >
                                { for StatusFilter::options().into_iter().map(|option| html! {
                                    <option value={option.as_select_value()} selected={option == filter}>
                                        { option.label() }
                                    </option>
                                }) }
                            </select>
                        </div>
                    </div>
                </div>

                <FeedbackTable
                    feedbacks={visible}
                    filter={filter}
                    on_edit={on_edit}
                    on_summary={on_summary}
                />
            </div>

            <Modal open={state.modal == OpenModal::Create} title="Create New Feedback" on_close={on_close.clone()}>
                <div class="space-y-4">
                    <FeedbackFormFields form={state.form.clone()} on_change={on_form_change.clone()} />
                    <div class={classes!("flex", "justify-end", "space-x-3", "pt-4")}>
                        <button type="button" onclick={on_close_click.clone()} class={secondary_button()}>
                            { "Cancel" }
                        </button>
                        <button type="button" onclick={on_create_submit} class={primary_button()} disabled={*saving}>
                            { if *saving { "Creating..." } else { "Create" } }
                        </button>
                    </div>
                </div>
            </Modal>

            <Modal open={state.modal == OpenModal::Edit} title="Edit Feedback" on_close={on_close.clone()}>
                <div class="space-y-4">
                    <FeedbackFormFields
                        form={state.form.clone()}
                        details_readonly=true
                        on_change={on_form_change}
                    />
                    <div class={classes!("flex", "justify-end", "space-x-3", "pt-4")}>
                        <button type="button" onclick={on_close_click.clone()} class={secondary_button()}>
                            { "Cancel" }
                        </button>
                        <button type="button" onclick={on_update_submit} class={primary_button()} disabled={*saving}>
                            { if *saving { "Updating..." } else { "Update" } }
                        </button>
                    </div>
                </div>
            </Modal>

            <Modal open={state.modal == OpenModal::Summary} title="AI Feedback Analysis" on_close={on_close}>
                { summary_details(&state, on_close_click) }
            </Modal>
        </div>
    }
}
