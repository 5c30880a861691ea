use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist or has moved."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
