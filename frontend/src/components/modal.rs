use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Html,
}

/// Overlay dialog. Renders nothing while closed.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "bg-gray-600/50",
                "overflow-y-auto",
                "h-full",
                "w-full",
                "z-50",
                "flex",
                "items-start",
                "justify-center",
                "p-4"
            )}
            role="dialog"
            aria-modal="true"
        >
            <div class={classes!("relative", "bg-white", "rounded-lg", "shadow-lg", "w-full", "max-w-md", "mx-auto", "mt-10", "sm:mt-20")}>
                <div class="p-6">
                    <div class={classes!("flex", "justify-between", "items-center", "mb-4")}>
                        <h3 class={classes!("text-lg", "font-medium", "text-gray-900")}>{ props.title.clone() }</h3>
                        <button
                            type="button"
                            onclick={close_click}
                            class={classes!("text-gray-400", "hover:text-gray-600", "focus:outline-none", "text-2xl", "leading-none")}
                            aria-label="Close modal"
                        >
                            { "×" }
                        </button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}
