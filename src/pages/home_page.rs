use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::user_panel::UserPanel;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub backend: String,
}

#[function_component(HomePage)]
pub fn home_page(HomePageProps { backend }: &HomePageProps) -> Html {
    html! {
        <div class="container">
            <header>
                <div class="logo">
                    <span>
                        <Link<Route> to={Route::Home}>
                            { "UserDeck" }
                        </Link<Route>>
                    </span>
                </div>
            </header>
            <main class="main-content">
                <UserPanel backend={backend.clone()} />
            </main>
        </div>
    }
}
