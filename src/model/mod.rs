//! Persisted entities. Only `User` is wired to routes; the rest are declared tables.

pub mod availability;
pub mod group;
pub mod holiday;
pub mod preference;
pub mod user;

pub use availability::Availability;
pub use group::{Group, GroupMember};
pub use holiday::Holiday;
pub use preference::Preference;
pub use user::{IdScheme, NewUser, UserChanges, UserId, UserRecord};

/// Table DDL in dependency order.
pub(crate) const TABLES: &[(&str, &str)] = &[
    ("users", user::DDL),
    ("groups", group::DDL),
    ("group_members", group::MEMBERS_DDL),
    ("holidays", holiday::DDL),
    ("preferences", preference::DDL),
    ("availabilities", availability::DDL),
];
