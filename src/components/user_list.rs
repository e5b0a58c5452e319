use yew::prelude::*;

use crate::cache::DisplayList;
use crate::components::user_card::UserCard;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct UserListProps {
    pub users: DisplayList,
    pub theme: Theme,
    pub on_delete: Callback<i64>,
}

#[function_component(UserList)]
pub fn user_list(
    UserListProps {
        users,
        theme,
        on_delete,
    }: &UserListProps,
) -> Html {
    let delete_callback = |id: i64| {
        let on_delete = on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <div class="user-rows">
            { for users.iter().map(|user| html! {
                <div class="user-row" key={user.id.to_string()}>
                    <UserCard user={user.clone()} />
                    <button
                        class={classes!("btn", theme.button)}
                        onclick={delete_callback(user.id)}
                    >
                        { "Delete User" }
                    </button>
                </div>
            }) }
        </div>
    }
}
