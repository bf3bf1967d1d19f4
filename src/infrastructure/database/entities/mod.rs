pub mod carrier_token;
pub mod info_group;
pub mod info_item;
pub mod info_item_group;
pub mod role;
pub mod user;
pub mod user_info;
pub mod user_role;
