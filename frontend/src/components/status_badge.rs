use feedback_dashboard_shared::FeedbackStatus;
use yew::prelude::*;

fn status_badge_class(status: FeedbackStatus) -> Classes {
    let base = classes!("inline-flex", "px-2", "py-1", "text-xs", "font-semibold", "rounded-full");
    match status {
        FeedbackStatus::Pending => classes!(base, "bg-yellow-100", "text-yellow-800"),
        FeedbackStatus::Resolved => classes!(base, "bg-green-100", "text-green-800"),
        FeedbackStatus::Archived => classes!(base, "bg-gray-100", "text-gray-800"),
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: FeedbackStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={status_badge_class(props.status)}>{ props.status.label() }</span>
    }
}
