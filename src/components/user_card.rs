use yew::prelude::*;

use crate::types::User;

#[derive(Properties, PartialEq)]
pub struct UserCardProps {
    pub user: User,
}

#[function_component(UserCard)]
pub fn user_card(UserCardProps { user }: &UserCardProps) -> Html {
    html! {
        <div class="user-card">
            <div class="user-card-id">{ format!("#{}", user.id) }</div>
            <div class="user-card-name">{ &user.name }</div>
            <div class="user-card-email">{ &user.email }</div>
        </div>
    }
}
