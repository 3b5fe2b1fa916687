use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Large,
}

impl SpinnerSize {
    fn classes(&self) -> Classes {
        match self {
            SpinnerSize::Small => classes!("h-4", "w-4", "border-b-2"),
            SpinnerSize::Large => classes!("h-12", "w-12", "border-b-2"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Large)]
    pub size: SpinnerSize,
    /// Caption under the spinner; screen readers get it either way.
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(false)]
    pub fullscreen: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let label = props.label.clone().unwrap_or_else(|| AttrValue::from("Loading..."));

    let spinner = html! {
        <div class={classes!("text-center")} role="status" aria-live="polite" aria-busy="true">
            <div
                class={classes!(
                    props.size.classes(),
                    "animate-spin",
                    "rounded-full",
                    "border-indigo-600",
                    "mx-auto"
                )}
            />
            if props.label.is_some() {
                <p class={classes!("mt-4", "text-gray-600")}>{ label }</p>
            } else {
                <span class={classes!("sr-only")}>{ label }</span>
            }
        </div>
    };

    if props.fullscreen {
        html! {
            <div class={classes!("min-h-screen", "bg-gray-50", "flex", "items-center", "justify-center")}>
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
