use feedback_dashboard_shared::dashboard::{Toast, ToastKind};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

const AUTO_DISMISS_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct ToastBannerProps {
    pub toast: Toast,
    /// Receives the id of the toast being closed.
    pub on_close: Callback<u64>,
}

/// Floating notification. Mount it with `key={toast.id}` so every toast gets
/// its own timer.
#[function_component(ToastBanner)]
pub fn toast_banner(props: &ToastBannerProps) -> Html {
    let dismiss = {
        let on_close = props.on_close.clone();
        let id = props.toast.id;
        Callback::from(move |_: ()| on_close.emit(id))
    };

    {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), AUTO_DISMISS_MS);
    }

    let (icon, tone) = match props.toast.kind {
        ToastKind::Success => ("✅", classes!("bg-green-50", "text-green-800", "border-green-200")),
        ToastKind::Error => ("⚠️", classes!("bg-red-50", "text-red-800", "border-red-200")),
    };

    let close_button = Callback::from(move |_: MouseEvent| dismiss.emit(()));

    html! {
        <div class={classes!("fixed", "top-4", "left-1/2", "-translate-x-1/2", "z-[60]", "w-full", "max-w-md", "px-4")}>
            <div
                class={classes!(
                    tone,
                    "flex",
                    "items-start",
                    "gap-3",
                    "rounded-lg",
                    "border",
                    "px-4",
                    "py-3",
                    "text-sm",
                    "shadow-lg"
                )}
                role="alert"
                aria-live="assertive"
            >
                <span aria-hidden="true">{ icon }</span>
                <p class={classes!("flex-1", "m-0")}>{ props.toast.message.clone() }</p>
                <button
                    type="button"
                    class={classes!("ml-2", "text-lg", "leading-none", "opacity-60", "hover:opacity-100")}
                    aria-label="Dismiss notification"
                    onclick={close_button}
                >
                    { "×" }
                </button>
            </div>
        </div>
    }
}
