use yew::prelude::*;

use crate::api;
use crate::config;
use crate::types::{NewUserDraft, User};

#[derive(Properties, PartialEq)]
pub struct CreateUserFormProps {
    pub backend: String,
    pub on_created: Callback<User>,
}

/// Creation form. Owns its input buffer, posts the draft itself and hands
/// the stored record up through `on_created`. The buffer is cleared only
/// after a successful submit.
#[function_component(CreateUserForm)]
pub fn create_user_form(
    CreateUserFormProps {
        backend,
        on_created,
    }: &CreateUserFormProps,
) -> Html {
    let draft = use_state(NewUserDraft::default);

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
        let on_created = on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = draft.clone();
            let body = (*draft).clone();
            let backend = backend.clone();
            let on_created = on_created.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match api::create_user(config::api_base_url(), &backend, &body).await {
                    Ok(user) => {
                        draft.set(NewUserDraft::default());
                        on_created.emit(user);
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("Error creating user: {err}").into());
                    }
                }
            });
        })
    };

    html! {
        <form class="user-form" {onsubmit}>
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
            <button type="submit" class="btn btn-submit">{ "Add User" }</button>
        </form>
    }
}
