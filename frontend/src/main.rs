//! Feedback Viewer Dashboard: a single-page Yew app over the feedback API.

mod api;
mod components;
mod pages;
mod router;
mod state;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
