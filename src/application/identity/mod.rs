pub mod service;

pub use service::{
    LoginOutcome, ModerationAction, RevertStatus, TokenInfo, UserListPage, UserService,
};
