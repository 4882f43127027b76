//! Versioned resource routes, all behind the admin guard.

use crate::handlers::{crud, links, user};
use crate::models::{Blog, Invitation, Job, Organization, Permission, Profile, Role, Subscription};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

/// `GET|POST {base}` and `GET|PUT|DELETE {base}/:id` for one resource.
fn crud_routes<R: CrudService>(base: &str) -> Router<AppState> {
    Router::new()
        .route(base, get(crud::list::<R>).post(crud::create::<R>))
        .route(
            &format!("{base}/:id"),
            get(crud::read::<R>).put(crud::update::<R>).delete(crud::delete::<R>),
        )
}

fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/roles/:id/permissions", get(links::list_role_permissions))
        .route(
            "/roles/:id/permissions/:permission_id",
            put(links::grant_permission).delete(links::revoke_permission),
        )
        .route(
            "/organizations/:id/members/:user_id",
            put(links::add_member).delete(links::remove_member),
        )
        .route(
            "/users/:id/roles/:role_id",
            put(links::assign_role).delete(links::unassign_role),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(user::list))
        .route("/users/:id", get(user::read).delete(user::delete))
}

/// Everything mounted under `/api/v1`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(crud_routes::<Permission>("/permissions"))
        .merge(crud_routes::<Organization>("/organizations"))
        .merge(crud_routes::<Role>("/roles"))
        .merge(crud_routes::<Invitation>("/invitations"))
        .merge(crud_routes::<Profile>("/profiles"))
        .merge(crud_routes::<Blog>("/blogs"))
        .merge(crud_routes::<Job>("/jobs"))
        .merge(crud_routes::<Subscription>("/subscriptions"))
        .merge(user_routes())
        .merge(link_routes())
        .with_state(state)
}
