//! Association endpoints. Path order follows the URL; [`Link`] decides the
//! column order.

use super::parse_id;
use crate::error::ApiError;
use crate::extractors::{AdminUser, DbSession};
use crate::response::Envelope;
use crate::schemas::link::LinkResponse;
use crate::schemas::permission::PermissionResponse;
use crate::service::links::Link;
use crate::service::role;
use axum::extract::Path;

pub async fn list_role_permissions(
    _admin: AdminUser,
    Path(role_id): Path<String>,
    mut db: DbSession,
) -> Result<Envelope<Vec<PermissionResponse>>, ApiError> {
    let role_id = parse_id(&role_id, "Role")?;
    let granted = role::permissions_of(&mut db, role_id).await?;
    Ok(Envelope::ok(
        "Permissions fetched successfully",
        granted.into_iter().map(PermissionResponse::from).collect(),
    ))
}

pub async fn grant_permission(
    _admin: AdminUser,
    Path((role_id, permission_id)): Path<(String, String)>,
    mut db: DbSession,
) -> Result<Envelope<LinkResponse>, ApiError> {
    let role_id = parse_id(&role_id, "Role")?;
    let permission_id = parse_id(&permission_id, "Permission")?;
    let link = Link::RolePermission.attach(&mut db, role_id, permission_id).await?;
    Ok(Envelope::ok("Permission granted successfully", link))
}

pub async fn revoke_permission(
    _admin: AdminUser,
    Path((role_id, permission_id)): Path<(String, String)>,
    mut db: DbSession,
) -> Result<Envelope<LinkResponse>, ApiError> {
    let role_id = parse_id(&role_id, "Role")?;
    let permission_id = parse_id(&permission_id, "Permission")?;
    let link = Link::RolePermission.detach(&mut db, role_id, permission_id).await?;
    Ok(Envelope::ok("Permission revoked successfully", link))
}

pub async fn add_member(
    _admin: AdminUser,
    Path((organization_id, user_id)): Path<(String, String)>,
    mut db: DbSession,
) -> Result<Envelope<LinkResponse>, ApiError> {
    let organization_id = parse_id(&organization_id, "Organization")?;
    let user_id = parse_id(&user_id, "User")?;
    let link = Link::UserOrganization.attach(&mut db, user_id, organization_id).await?;
    Ok(Envelope::ok("Member added successfully", link))
}

pub async fn remove_member(
    _admin: AdminUser,
    Path((organization_id, user_id)): Path<(String, String)>,
    mut db: DbSession,
) -> Result<Envelope<LinkResponse>, ApiError> {
    let organization_id = parse_id(&organization_id, "Organization")?;
    let user_id = parse_id(&user_id, "User")?;
    let link = Link::UserOrganization.detach(&mut db, user_id, organization_id).await?;
    Ok(Envelope::ok("Member removed successfully", link))
}

pub async fn assign_role(
    _admin: AdminUser,
    Path((user_id, role_id)): Path<(String, String)>,
    mut db: DbSession,
) -> Result<Envelope<LinkResponse>, ApiError> {
    let user_id = parse_id(&user_id, "User")?;
    let role_id = parse_id(&role_id, "Role")?;
    let link = Link::UserRole.attach(&mut db, user_id, role_id).await?;
    Ok(Envelope::ok("Role assigned successfully", link))
}

pub async fn unassign_role(
    _admin: AdminUser,
    Path((user_id, role_id)): Path<(String, String)>,
    mut db: DbSession,
) -> Result<Envelope<LinkResponse>, ApiError> {
    let user_id = parse_id(&user_id, "User")?;
    let role_id = parse_id(&role_id, "Role")?;
    let link = Link::UserRole.detach(&mut db, user_id, role_id).await?;
    Ok(Envelope::ok("Role unassigned successfully", link))
}
