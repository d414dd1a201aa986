//! Resource client seam shared by all entity screens.
//!
//! One REST resource exists per entity type. The trait keeps the HTTP layer
//! substitutable, so the save orchestration below can be exercised against
//! recording fakes.

use contracts::domain::common::Identified;

/// Network CRUD for one entity type.
///
/// Every call is a single-completion async operation. Errors are plain
/// strings, the error convention of this frontend.
#[allow(async_fn_in_trait)]
pub trait EntityResource {
    type Entity: Identified;

    async fn query(&self) -> Result<Vec<Self::Entity>, String>;
    async fn find(&self, id: i64) -> Result<Self::Entity, String>;
    async fn create(&self, entity: &Self::Entity) -> Result<Self::Entity, String>;
    async fn update(&self, entity: &Self::Entity) -> Result<Self::Entity, String>;
    async fn delete(&self, id: i64) -> Result<(), String>;
}

/// Route a save to `update` when the payload already carries an id,
/// to `create` otherwise.
pub async fn dispatch_save<R: EntityResource>(
    resource: &R,
    payload: &R::Entity,
) -> Result<R::Entity, String> {
    match payload.entity_id() {
        Some(_) => resource.update(payload).await,
        None => resource.create(payload).await,
    }
}

/// Drive a save to completion.
///
/// `finalize` runs exactly once whichever way the call ends; `navigate_back`
/// runs only after a success. A failed save is logged and otherwise
/// swallowed, which matches the product behavior of these screens.
pub async fn settle_save<R: EntityResource>(
    resource: &R,
    payload: &R::Entity,
    finalize: impl FnOnce(),
    navigate_back: impl FnOnce(),
) {
    let result = dispatch_save(resource, payload).await;
    finalize();
    match result {
        Ok(_) => navigate_back(),
        Err(e) => log::error!("save failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::category::Category;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordingResource {
        create_calls: Cell<usize>,
        update_calls: Cell<usize>,
        fail: bool,
    }

    impl EntityResource for RecordingResource {
        type Entity = Category;

        async fn query(&self) -> Result<Vec<Category>, String> {
            Ok(Vec::new())
        }

        async fn find(&self, _id: i64) -> Result<Category, String> {
            Err("not wired in this fake".into())
        }

        async fn create(&self, entity: &Category) -> Result<Category, String> {
            self.create_calls.set(self.create_calls.get() + 1);
            if self.fail {
                Err("create failed".into())
            } else {
                Ok(Category {
                    id: Some(1),
                    ..entity.clone()
                })
            }
        }

        async fn update(&self, entity: &Category) -> Result<Category, String> {
            self.update_calls.set(self.update_calls.get() + 1);
            if self.fail {
                Err("update failed".into())
            } else {
                Ok(entity.clone())
            }
        }

        async fn delete(&self, _id: i64) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn save_with_id_goes_through_update() {
        let resource = RecordingResource::default();
        let payload = Category {
            id: Some(123),
            ..Category::default()
        };

        block_on(dispatch_save(&resource, &payload)).unwrap();

        assert_eq!(resource.update_calls.get(), 1);
        assert_eq!(resource.create_calls.get(), 0);
    }

    #[test]
    fn save_without_id_goes_through_create() {
        let resource = RecordingResource::default();
        let payload = Category::default();

        let created = block_on(dispatch_save(&resource, &payload)).unwrap();

        assert_eq!(resource.create_calls.get(), 1);
        assert_eq!(resource.update_calls.get(), 0);
        assert_eq!(created.id, Some(1));
    }

    #[test]
    fn successful_save_finalizes_then_navigates_back_once() {
        let resource = RecordingResource::default();
        let payload = Category {
            id: Some(123),
            ..Category::default()
        };
        let saving = Cell::new(true);
        let navigations = Cell::new(0_usize);

        block_on(settle_save(
            &resource,
            &payload,
            || saving.set(false),
            || navigations.set(navigations.get() + 1),
        ));

        assert!(!saving.get());
        assert_eq!(navigations.get(), 1);
        assert_eq!(resource.update_calls.get(), 1);
    }

    #[test]
    fn failed_save_finalizes_without_navigating() {
        let resource = RecordingResource {
            fail: true,
            ..RecordingResource::default()
        };
        let payload = Category {
            id: Some(123),
            ..Category::default()
        };
        let saving = Cell::new(true);
        let navigations = Cell::new(0_usize);

        block_on(settle_save(
            &resource,
            &payload,
            || saving.set(false),
            || navigations.set(navigations.get() + 1),
        ));

        assert!(!saving.get());
        assert_eq!(navigations.get(), 0);
    }
}
