use feedback_dashboard_shared::{Feedback, StatusFilter};
use yew::prelude::*;

use crate::components::status_badge::StatusBadge;

#[derive(Properties, PartialEq)]
pub struct FeedbackTableProps {
    /// Rows already filtered by `filter`.
    pub feedbacks: Vec<Feedback>,
    pub filter: StatusFilter,
    pub on_edit: Callback<Feedback>,
    pub on_summary: Callback<Feedback>,
}

fn th_class() -> Classes {
    classes!(
        "px-4",
        "sm:px-6",
        "py-3",
        "text-left",
        "text-xs",
        "font-medium",
        "text-gray-500",
        "uppercase",
        "tracking-wider"
    )
}

#[function_component(FeedbackTable)]
pub fn feedback_table(props: &FeedbackTableProps) -> Html {
    let rows = props.feedbacks.iter().map(|feedback| {
        let edit_click = {
            let on_edit = props.on_edit.clone();
            let feedback = feedback.clone();
            Callback::from(move |_: MouseEvent| on_edit.emit(feedback.clone()))
        };
        let summary_click = {
            let on_summary = props.on_summary.clone();
            let feedback = feedback.clone();
            Callback::from(move |_: MouseEvent| on_summary.emit(feedback.clone()))
        };

        html! {
            <tr key={feedback.id} class="hover:bg-gray-50">
                <td class={classes!("px-4", "sm:px-6", "py-4", "whitespace-nowrap", "text-sm", "font-medium", "text-gray-900")}>
                    { feedback.id.to_string() }
                </td>
                <td class={classes!("px-4", "sm:px-6", "py-4", "whitespace-nowrap", "text-sm", "text-gray-900")}>
                    { feedback.name.clone() }
                </td>
                <td class={classes!("px-4", "sm:px-6", "py-4", "whitespace-nowrap", "text-sm", "text-gray-500", "hidden", "sm:table-cell")}>
                    { feedback.email.clone() }
                </td>
                <td
                    class={classes!("px-4", "sm:px-6", "py-4", "text-sm", "text-gray-900", "max-w-xs", "truncate", "hidden", "md:table-cell")}
                    title={feedback.message.clone()}
                >
                    { feedback.message.clone() }
                </td>
                <td class={classes!("px-4", "sm:px-6", "py-4", "whitespace-nowrap")}>
                    <StatusBadge status={feedback.status} />
                </td>
                <td class={classes!("px-4", "sm:px-6", "py-4", "whitespace-nowrap", "text-sm", "font-medium", "space-x-2", "sm:space-x-4")}>
                    <button type="button" class={classes!("text-indigo-600", "hover:text-indigo-900")} onclick={edit_click}>
                        { "Edit" }
                    </button>
                    <button
                        type="button"
                        class={classes!(
                            "inline-flex",
                            "items-center",
                            "px-2",
                            "sm:px-3",
                            "py-1",
                            "bg-green-100",
                            "hover:bg-green-200",
                            "text-green-700",
                            "rounded-md",
                            "text-xs",
                            "sm:text-sm",
                            "font-medium",
                            "transition-colors"
                        )}
                        onclick={summary_click}
                    >
                        <span class={classes!("hidden", "sm:inline", "mr-1")}>{ "AI" }</span>
                        { "Summary" }
                    </button>
                </td>
            </tr>
        }
    });

    html! {
        <div class={classes!("bg-white", "rounded-lg", "shadow", "overflow-hidden")}>
            <div class={classes!("px-4", "sm:px-6", "py-4", "border-b", "border-gray-200")}>
                <h2 class={classes!("text-lg", "font-medium", "text-gray-900")}>
                    { format!("Feedback List ({} items)", props.feedbacks.len()) }
                </h2>
            </div>

            <div class="overflow-x-auto">
                <table class={classes!("min-w-full", "divide-y", "divide-gray-200")}>
                    <thead class="bg-gray-50">
                        <tr>
                            <th scope="col" class={classes!(th_class())}>{ "ID" }</th>
                            <th scope="col" class={classes!(th_class())}>{ "Name" }</th>
                            <th scope="col" class={classes!(th_class(), "hidden", "sm:table-cell")}>{ "Email" }</th>
                            <th scope="col" class={classes!(th_class(), "hidden", "md:table-cell")}>{ "Message" }</th>
                            <th scope="col" class={classes!(th_class())}>{ "Status" }</th>
                            <th scope="col" class={classes!(th_class())}>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody class={classes!("bg-white", "divide-y", "divide-gray-200")}>
                        { for rows }
                    </tbody>
                </table>
            </div>

            if props.feedbacks.is_empty() {
                <div class={classes!("px-6", "py-8", "text-center")}>
                    <p class="text-gray-500">{ props.filter.empty_message() }</p>
                </div>
            }
        </div>
    }
}
