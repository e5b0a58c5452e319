pub mod create_user_form;
pub mod update_user_form;
pub mod user_card;
pub mod user_list;
pub mod user_panel;
