pub mod config;
pub mod users;

pub use users::{
    dto::{CreateUserRequest, PublicUser},
    error::UserError,
    repo_types::{InvalidUserId, User, UserId, UserStatus},
    services::UserDirectory,
};
