use yew::prelude::*;

use crate::api;
use crate::config;
use crate::types::{UpdateDraft, User};

#[derive(Properties, PartialEq)]
pub struct UpdateUserFormProps {
    pub backend: String,
    /// Ids currently on display, for rejecting updates before any request
    /// goes out.
    pub known_ids: Vec<i64>,
    pub on_updated: Callback<User>,
}

/// Update-by-id form. Owns its input buffer, validates the id against the
/// displayed records, puts the new fields itself and hands the rewritten
/// record up through `on_updated`. The buffer is cleared only after a
/// successful submit.
#[function_component(UpdateUserForm)]
pub fn update_user_form(
    UpdateUserFormProps {
        backend,
        known_ids,
        on_updated,
    }: &UpdateUserFormProps,
) -> Html {
    let draft = use_state(UpdateDraft::default);

    let on_id_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.id = input.value();
            draft.set(next);
        })
    };

    let on_name_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.name = input.value();
            draft.set(next);
        })
    };

    let on_email_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.email = input.value();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let backend = backend.clone();
        let known_ids = known_ids.clone();
        let on_updated = on_updated.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let body = (*draft).clone();

            let id = match body.parsed_id() {
                Some(id) => id,
                None => {
                    web_sys::console::error_1(
                        &format!("Ignoring update: {:?} is not an integer id", body.id).into(),
                    );
                    return;
                }
            };
            if !known_ids.contains(&id) {
                web_sys::console::error_1(
                    &format!("Ignoring update: no displayed user with id {id}").into(),
                );
                return;
            }

            let draft = draft.clone();
            let backend = backend.clone();
            let on_updated = on_updated.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::update_user(config::api_base_url(), &backend, id, &body.name, &body.email)
                    .await
                {
                    Ok(()) => {
                        draft.set(UpdateDraft::default());
                        on_updated.emit(User {
                            id,
                            name: body.name,
                            email: body.email,
                        });
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Error updating user: {err}").into());
                    }
                }
            });
        })
    };

    html! {
        <form class="user-form" {onsubmit}>
            <input
                class="form-input"
                placeholder="User Id"
                value={draft.id.clone()}
                oninput={on_id_input}
            />
            <input
                class="form-input"
                placeholder="Name"
                value={draft.name.clone()}
                oninput={on_name_input}
            />
            <input
                class="form-input"
                placeholder="Email"
                value={draft.email.clone()}
                oninput={on_email_input}
            />
            <button type="submit" class="btn btn-submit">{ "Update User" }</button>
        </form>
    }
}
