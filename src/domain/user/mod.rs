//! User aggregate
//!
//! Contains the user/role/info-catalog models, service DTOs, the info
//! reconciliation routine and the repository interface.

pub mod dto;
pub mod model;
pub mod projection;
pub mod repository;

pub use dto::{CreateUserDto, FindUsersDto, InfoKvDto, RoleSwapDto, UpdateUserDto};
pub use model::{InfoItem, ProjectedUserInfo, Role, User, UserInfoValue, UserProjection};
pub use projection::{project_user, reconcile_user_info};
pub use repository::UserRepositoryInterface;
