use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::home_page::HomePage;

/// The backend identifier rides in the path, so switching backends is a
/// plain navigation.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/:backend")]
    Backend { backend: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage backend="flask" /> },
        Route::Backend { backend } => html! { <HomePage backend={backend} /> },
        Route::NotFound => html! { <h1>{ "404" }</h1> },
    }
}
