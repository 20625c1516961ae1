//! Database utility functions.

use uuid::Uuid;

/// Length of generated entity IDs, matching document-store object IDs.
pub const ENTITY_ID_LEN: usize = 24;

/// Generate a 24-character lowercase hex ID for database entities.
pub fn generate_entity_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ENTITY_ID_LEN);
    id
}
