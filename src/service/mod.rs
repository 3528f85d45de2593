//! UserService: uniqueness rules and the mapping between stored records and responses.

mod user;
pub use user::UserService;
