//! Many-to-many associations: role↔permission, user↔role, user↔organization.
//!
//! Attaching is idempotent. A missing endpoint is reported as not found for
//! whichever side the violated foreign key names.

use crate::error::AppError;
use crate::schemas::link::LinkResponse;
use sqlx::PgConnection;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    RolePermission,
    UserRole,
    UserOrganization,
}

struct Side {
    column: &'static str,
    resource: &'static str,
}

impl Link {
    fn table(self) -> &'static str {
        match self {
            Link::RolePermission => "role_permission",
            Link::UserRole => "user_role",
            Link::UserOrganization => "user_organization",
        }
    }

    fn sides(self) -> (Side, Side) {
        match self {
            Link::RolePermission => (
                Side { column: "role_id", resource: "Role" },
                Side { column: "permission_id", resource: "Permission" },
            ),
            Link::UserRole => (
                Side { column: "user_id", resource: "User" },
                Side { column: "role_id", resource: "Role" },
            ),
            Link::UserOrganization => (
                Side { column: "user_id", resource: "User" },
                Side { column: "organization_id", resource: "Organization" },
            ),
        }
    }

    /// Resource label used when the association itself is missing.
    pub fn label(self) -> &'static str {
        match self {
            Link::RolePermission => "Role permission",
            Link::UserRole => "User role",
            Link::UserOrganization => "Membership",
        }
    }

    fn response(self, left: Uuid, right: Uuid) -> LinkResponse {
        let (l, r) = self.sides();
        LinkResponse {
            left_column: l.column,
            left_id: left,
            right_column: r.column,
            right_id: right,
        }
    }

    /// Map a foreign-key violation to the side it names.
    fn classify(self, err: sqlx::Error, left: Uuid, right: Uuid) -> AppError {
        let (l, r) = self.sides();
        if let sqlx::Error::Database(db) = &err {
            if db.is_foreign_key_violation() {
                let constraint = db.constraint().unwrap_or_default();
                let side = format!("{}_{}_fkey", self.table(), r.column);
                return if constraint == side {
                    AppError::not_found(r.resource, right)
                } else {
                    AppError::not_found(l.resource, left)
                };
            }
        }
        AppError::from_write(err, self.label())
    }

    pub async fn attach(self, conn: &mut PgConnection, left: Uuid, right: Uuid) -> Result<LinkResponse, AppError> {
        let (l, r) = self.sides();
        let sql = format!(
            "INSERT INTO {} ({}, {}) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            self.table(),
            l.column,
            r.column
        );
        tracing::debug!(sql = %sql, "attach");
        sqlx::query(&sql)
            .bind(left)
            .bind(right)
            .execute(conn)
            .await
            .map_err(|e| self.classify(e, left, right))?;
        Ok(self.response(left, right))
    }

    pub async fn detach(self, conn: &mut PgConnection, left: Uuid, right: Uuid) -> Result<LinkResponse, AppError> {
        let (l, r) = self.sides();
        let sql = format!(
            "DELETE FROM {} WHERE {} = $1 AND {} = $2",
            self.table(),
            l.column,
            r.column
        );
        tracing::debug!(sql = %sql, "detach");
        let done = sqlx::query(&sql).bind(left).bind(right).execute(conn).await?;
        if done.rows_affected() == 0 {
            return Err(AppError::not_found(self.label(), format!("{left}/{right}")));
        }
        Ok(self.response(left, right))
    }
}
