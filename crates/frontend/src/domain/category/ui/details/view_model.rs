use std::rc::Rc;

use contracts::domain::category::Category;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::resource::{settle_save, EntityResource};

/// Form-backing state for the category editor. Explicit named fields, read
/// and written only through the view model and its view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl CategoryForm {
    pub fn from_entity(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }

    /// Payload for create/update, built from the current field values.
    pub fn to_entity(&self) -> Category {
        Category {
            id: self.id,
            name: self.name.clone(),
            competences: None,
        }
    }
}

/// ViewModel for the category editor.
#[derive(Clone)]
pub struct CategoryUpdateViewModel<R>
where
    R: EntityResource<Entity = Category> + Clone + 'static,
{
    resource: R,
    pub form: RwSignal<CategoryForm>,
    pub is_saving: RwSignal<bool>,
}

impl<R> CategoryUpdateViewModel<R>
where
    R: EntityResource<Entity = Category> + Clone + 'static,
{
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            form: RwSignal::new(CategoryForm::default()),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn apply_entity(&self, category: Category) {
        self.form.set(CategoryForm::from_entity(category));
    }

    /// Load the entity when editing; a create screen starts from the empty form.
    pub fn initialize(&self, id: Option<i64>) {
        let Some(existing) = id else {
            return;
        };
        let vm = self.clone();
        spawn_local(async move {
            match vm.resource.find(existing).await {
                Ok(category) => vm.apply_entity(category),
                Err(e) => log::error!("loading category {existing} failed: {e}"),
            }
        });
    }

    /// Create or update from the current form values, then navigate back on
    /// success. A failed save only drops the saving flag.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        self.is_saving.set(true);
        let is_saving = self.is_saving;
        let payload = self.form.get_untracked().to_entity();
        let resource = self.resource.clone();
        spawn_local(async move {
            settle_save(
                &resource,
                &payload,
                move || is_saving.set(false),
                move || on_saved(()),
            )
            .await;
        });
    }
}
