use serde::Serialize;
use uuid::Uuid;

/// A row of an association table, named by its two key columns.
#[derive(Debug, Clone, Serialize)]
pub struct LinkResponse {
    pub left_column: &'static str,
    pub left_id: Uuid,
    pub right_column: &'static str,
    pub right_id: Uuid,
}
