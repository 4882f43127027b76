//! Request and response shapes. Each resource has a Create and an Update body
//! (validated on extraction) and a Response built by a single `From<Row>`.

pub mod blog;
pub mod invitation;
pub mod job;
pub mod link;
pub mod organization;
pub mod permission;
pub mod profile;
pub mod role;
pub mod subscription;
pub mod user;

fn default_true() -> bool {
    true
}
