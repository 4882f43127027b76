//! Row types, one per table. Relationships live in the schema as foreign keys
//! and association tables (`user_organization`, `user_role`, `role_permission`).

mod blog;
mod invitation;
mod job;
mod organization;
mod permission;
mod profile;
mod role;
mod subscription;
mod user;

pub use blog::Blog;
pub use invitation::Invitation;
pub use job::Job;
pub use organization::Organization;
pub use permission::Permission;
pub use profile::Profile;
pub use role::Role;
pub use subscription::Subscription;
pub use user::User;
