/// Identifier extraction for persisted entities.
///
/// The server assigns numeric primary keys on create, so a transient entity
/// carries no identifier yet.
pub trait Identified {
    /// Primary key of the record, `None` while it has not been persisted.
    fn entity_id(&self) -> Option<i64>;
}
