use yew::prelude::*;

use crate::api;
use crate::cache::DisplayList;
use crate::components::create_user_form::CreateUserForm;
use crate::components::update_user_form::UpdateUserForm;
use crate::components::user_list::UserList;
use crate::config;
use crate::theme::Backend;
use crate::types::User;

#[derive(Properties, PartialEq)]
pub struct UserPanelProps {
    pub backend: String,
}

/// The user-records panel: loads the collection for the given backend,
/// mirrors it locally and patches the mirror optimistically after each
/// successful create/update/delete.
#[function_component(UserPanel)]
pub fn user_panel(UserPanelProps { backend }: &UserPanelProps) -> Html {
    let flavor = Backend::from_name(backend);
    let theme = flavor.theme();

    let users = use_state(DisplayList::default);
    {
        let users = users.clone();
        use_effect_with(
            (backend.clone(), config::api_base_url()),
            move |(backend, api_url)| {
                let users = users.clone();
                let backend = backend.clone();
                let api_url = *api_url;
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_users(api_url, &backend).await {
                        Ok(fetched) => {
                            let mut next = DisplayList::default();
                            next.reset(fetched);
                            users.set(next);
                        }
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("Error fetching users: {err}").into(),
                            );
                        }
                    }
                });
                || ()
            },
        );
    }

    let on_created = {
        let users = users.clone();
        Callback::from(move |user: User| {
            let mut next = (*users).clone();
            next.prepend(user);
            users.set(next);
        })
    };

    let on_updated = {
        let users = users.clone();
        Callback::from(move |user: User| {
            let mut next = (*users).clone();
            next.rewrite(user.id, &user.name, &user.email);
            users.set(next);
        })
    };

    let on_delete = {
        let users = users.clone();
        let backend = backend.clone();
        Callback::from(move |id: i64| {
            let users = users.clone();
            let backend = backend.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_user(config::api_base_url(), &backend, id).await {
                    Ok(()) => {
                        let mut next = (*users).clone();
                        next.remove(id);
                        users.set(next);
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Error deleting user: {err}").into());
                    }
                }
            });
        })
    };

    html! {
        <div class={classes!("user-panel", theme.panel)}>
            <h2 class="panel-title">
                { format!("{} Backend", flavor.label()) }
                <span class="panel-count">{ format!(" ({})", users.len()) }</span>
            </h2>

            <CreateUserForm backend={backend.clone()} on_created={on_created} />

            <UpdateUserForm
                backend={backend.clone()}
                known_ids={users.ids()}
                on_updated={on_updated}
            />

            <UserList users={(*users).clone()} {theme} on_delete={on_delete} />
        </div>
    }
}
