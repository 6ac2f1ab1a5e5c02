//! In-memory collection patching
//!
//! The collection is the client's advisory cache of server state: replaced
//! wholesale on fetch, patched incrementally here once the server has
//! confirmed a mutation. These functions are only called on confirmed
//! responses; a failed request never touches the cache.

use contracts::domain::common::{Entity, EntityId};

/// Append a created record (201 confirmed). The record is the server's
/// returned representation, id included.
pub fn append_created<E: Entity>(items: &mut Vec<E>, created: E) {
    items.push(created);
}

/// Replace the entry matching the updated record's id (200 confirmed),
/// preserving its position. A miss leaves the collection unchanged.
pub fn replace_updated<E: Entity>(items: &mut Vec<E>, updated: E) {
    if let Some(slot) = items.iter_mut().find(|item| item.id() == updated.id()) {
        *slot = updated;
    }
}

/// Remove the entry with `id` (204 confirmed). A miss is a no-op.
pub fn remove_deleted<E: Entity>(items: &mut Vec<E>, id: EntityId) {
    items.retain(|item| item.id() != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::Category;

    fn category(id: EntityId, name: &str) -> Category {
        Category {
            id,
            name: name.into(),
            description: String::new(),
        }
    }

    #[test]
    fn create_appends_exactly_one_entry() {
        let mut items = vec![category(1, "Food")];
        append_created(&mut items, category(7, "Drinks"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, 7);
        assert_eq!(items[1].name, "Drinks");
    }

    #[test]
    fn update_replaces_only_the_matching_entry_in_place() {
        let mut items = vec![category(1, "Food"), category(7, "Drinks"), category(9, "Misc")];
        replace_updated(&mut items, category(7, "Beverages"));
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].id, 7);
        assert_eq!(items[1].name, "Beverages");
        assert_eq!(items[0].name, "Food");
        assert_eq!(items[2].name, "Misc");
    }

    #[test]
    fn update_miss_leaves_the_collection_unchanged() {
        let mut items = vec![category(1, "Food")];
        replace_updated(&mut items, category(99, "Ghost"));
        assert_eq!(items, vec![category(1, "Food")]);
    }

    #[test]
    fn delete_removes_exactly_the_matching_entry() {
        let mut items = vec![category(1, "Food"), category(7, "Drinks")];
        remove_deleted(&mut items, 7);
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|c| c.id != 7));
    }

    #[test]
    fn delete_miss_is_a_no_op() {
        // mirrors a 404 delete: the server refused, nothing was confirmed,
        // and even a stray call with an unknown id cannot corrupt the cache
        let mut items = vec![category(1, "Food")];
        remove_deleted(&mut items, 9);
        assert_eq!(items.len(), 1);
    }
}
