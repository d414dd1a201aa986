use std::collections::HashSet;

use super::identified::Identified;

/// Merge "must include" entities into a freshly fetched picker collection.
///
/// Relationship pickers are filled from a server-side query that may not
/// contain the entity a record currently points to (filtered out, outside the
/// first page, deleted and restored). The required entities are prepended, in
/// the order given, so the current selection is always renderable.
///
/// Deduplication is by identifier only. A required entity whose identifier
/// already occurs in `collection` (or in an earlier required entity) is
/// skipped; a required entity without an identifier can never collide and is
/// always prepended. `None` entries are skipped silently.
pub fn add_to_collection_if_missing<T>(
    collection: Vec<T>,
    required: impl IntoIterator<Item = Option<T>>,
) -> Vec<T>
where
    T: Identified,
{
    let mut seen: HashSet<i64> = collection.iter().filter_map(Identified::entity_id).collect();

    let mut merged: Vec<T> = Vec::new();
    for entity in required.into_iter().flatten() {
        match entity.entity_id() {
            Some(id) => {
                if seen.insert(id) {
                    merged.push(entity);
                }
            }
            None => merged.push(entity),
        }
    }

    merged.extend(collection);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;

    fn category(id: i64) -> Category {
        Category {
            id: Some(id),
            ..Category::default()
        }
    }

    fn ids(collection: &[Category]) -> Vec<Option<i64>> {
        collection.iter().map(|c| c.id).collect()
    }

    #[test]
    fn prepends_missing_required_entity() {
        let fetched = vec![category(93910)];

        let merged = add_to_collection_if_missing(fetched, [Some(category(14229))]);

        assert_eq!(ids(&merged), [Some(14229), Some(93910)]);
    }

    #[test]
    fn leaves_collection_unchanged_when_required_is_already_present() {
        let fetched = vec![category(1), category(2), category(3)];

        let merged = add_to_collection_if_missing(fetched, [Some(category(2))]);

        assert_eq!(ids(&merged), [Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn skips_absent_required_entities() {
        let fetched = vec![category(7)];

        let merged = add_to_collection_if_missing(fetched, [None]);

        assert_eq!(ids(&merged), [Some(7)]);
    }

    #[test]
    fn keeps_required_order_and_deduplicates_among_required() {
        let fetched = vec![category(50)];

        let merged = add_to_collection_if_missing(
            fetched,
            [
                Some(category(10)),
                Some(category(20)),
                Some(category(10)),
                Some(category(50)),
            ],
        );

        assert_eq!(ids(&merged), [Some(10), Some(20), Some(50)]);
    }

    #[test]
    fn transient_entity_is_always_prepended() {
        let fetched = vec![category(1)];

        let merged =
            add_to_collection_if_missing(fetched, [Some(Category::default()), Some(Category::default())]);

        assert_eq!(ids(&merged), [None, None, Some(1)]);
    }

    #[test]
    fn works_on_an_empty_collection() {
        let merged = add_to_collection_if_missing(Vec::new(), [Some(category(42))]);

        assert_eq!(ids(&merged), [Some(42)]);
    }
}
