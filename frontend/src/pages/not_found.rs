use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("max-w-7xl", "mx-auto", "p-8", "text-center")}>
            <h2 class={classes!("text-2xl", "font-bold", "text-gray-900")}>{ "404 - Page not found" }</h2>
            <p class={classes!("mt-2", "text-gray-600")}>{ "The page you are looking for does not exist." }</p>
            <Link<Route> to={Route::Dashboard} classes={classes!("mt-4", "inline-block", "text-indigo-600", "hover:text-indigo-900")}>
                { "Back to the dashboard" }
            </Link<Route>>
        </main>
    }
}
