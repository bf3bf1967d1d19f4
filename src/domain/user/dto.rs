//! Service-layer input DTOs for user management

/// An info key/value pair supplied with create/update requests.
///
/// On create, `key` is the info-item id the value belongs to. On update,
/// `key` is the id of an existing value row to overwrite; when absent, a new
/// row is inserted for the item referenced by `relation_id`.
#[derive(Debug, Clone)]
pub struct InfoKvDto {
    pub key: Option<i32>,
    pub value: String,
    pub relation_id: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub role_ids: Vec<i32>,
    pub info_kvs: Vec<InfoKvDto>,
}

/// Replace one role assignment with another.
#[derive(Debug, Clone, Copy)]
pub struct RoleSwapDto {
    pub before: i32,
    pub after: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_ids: Vec<RoleSwapDto>,
    pub info_kvs: Vec<InfoKvDto>,
}

/// Paginated user listing filter.
#[derive(Debug, Clone, Default)]
pub struct FindUsersDto {
    pub page_size: u64,
    pub page_number: u64,
    /// Restrict to users holding this role
    pub role_id: Option<i32>,
    /// Fuzzy username filter
    pub username: Option<String>,
}
