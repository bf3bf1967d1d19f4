pub mod error;
pub mod shipping;
pub mod user;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use shipping::{CarrierToken, CarrierTokenRepositoryInterface};
pub use user::{
    project_user, reconcile_user_info, CreateUserDto, FindUsersDto, InfoItem, InfoKvDto,
    ProjectedUserInfo, Role, RoleSwapDto, UpdateUserDto, User, UserInfoValue,
    UserProjection, UserRepositoryInterface,
};
