use std::rc::Rc;

use contracts::domain::category::Category;
use contracts::domain::common::{add_to_collection_if_missing, Identified};
use contracts::domain::competence::Competence;
use contracts::domain::employee::Employee;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::resource::{settle_save, EntityResource};

/// Form-backing state for the competence editor. Explicit named fields, read
/// and written only through the view model and its view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompetenceForm {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub level: Option<i32>,
    pub category: Option<Category>,
    pub employee: Option<Employee>,
}

impl CompetenceForm {
    pub fn from_entity(competence: Competence) -> Self {
        Self {
            id: competence.id,
            name: competence.name,
            level: competence.level,
            category: competence.category,
            employee: competence.employee,
        }
    }

    /// Payload for create/update, built from the current field values.
    pub fn to_entity(&self) -> Competence {
        Competence {
            id: self.id,
            name: self.name.clone(),
            level: self.level,
            category: self.category.clone(),
            employee: self.employee.clone(),
        }
    }
}

/// Render key for category options. Every option comes out of a persisted
/// server collection, so a missing id is a programming error here.
pub fn track_category_by_id(category: &Category) -> i64 {
    category.entity_id().expect("category option without id")
}

/// Render key for employee options, same contract as [`track_category_by_id`].
pub fn track_employee_by_id(employee: &Employee) -> i64 {
    employee.entity_id().expect("employee option without id")
}

/// ViewModel for the competence editor.
///
/// Resource clients are injected at construction: the view binds the HTTP
/// implementations, tests substitute fakes.
#[derive(Clone)]
pub struct CompetenceUpdateViewModel<R, C, E>
where
    R: EntityResource<Entity = Competence> + Clone + 'static,
    C: EntityResource<Entity = Category> + Clone + 'static,
    E: EntityResource<Entity = Employee> + Clone + 'static,
{
    competences: R,
    categories: C,
    employees: E,
    pub form: RwSignal<CompetenceForm>,
    pub is_saving: RwSignal<bool>,
    pub categories_shared_collection: RwSignal<Vec<Category>>,
    pub employees_shared_collection: RwSignal<Vec<Employee>>,
}

impl<R, C, E> CompetenceUpdateViewModel<R, C, E>
where
    R: EntityResource<Entity = Competence> + Clone + 'static,
    C: EntityResource<Entity = Category> + Clone + 'static,
    E: EntityResource<Entity = Employee> + Clone + 'static,
{
    pub fn new(competences: R, categories: C, employees: E) -> Self {
        Self {
            competences,
            categories,
            employees,
            form: RwSignal::new(CompetenceForm::default()),
            is_saving: RwSignal::new(false),
            categories_shared_collection: RwSignal::new(Vec::new()),
            employees_shared_collection: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    /// Populate the form and make sure the current references are present in
    /// the shared collections even before the relationship queries resolve.
    pub fn apply_entity(&self, competence: Competence) {
        let form = CompetenceForm::from_entity(competence);

        self.categories_shared_collection.update(|list| {
            let fetched = std::mem::take(list);
            *list = add_to_collection_if_missing(fetched, [form.category.clone()]);
        });
        self.employees_shared_collection.update(|list| {
            let fetched = std::mem::take(list);
            *list = add_to_collection_if_missing(fetched, [form.employee.clone()]);
        });

        self.form.set(form);
    }

    /// Load the entity when editing, then fill the relationship pickers.
    /// A create screen starts from the empty form but still needs the pickers.
    pub fn initialize(&self, id: Option<i64>) {
        match id {
            Some(existing) => {
                let vm = self.clone();
                spawn_local(async move {
                    match vm.competences.find(existing).await {
                        Ok(competence) => vm.apply_entity(competence),
                        Err(e) => log::error!("loading competence {existing} failed: {e}"),
                    }
                    vm.load_relationship_options();
                });
            }
            None => self.load_relationship_options(),
        }
    }

    /// Query both relationship collections. The two loads are independent
    /// tasks: there is no ordering between their completions and each one
    /// writes only its own collection, reconciled with the reference the
    /// form holds at that moment.
    pub fn load_relationship_options(&self) {
        let form = self.form;

        let collection = self.categories_shared_collection;
        let categories = self.categories.clone();
        spawn_local(async move {
            match categories.query().await {
                Ok(fetched) => {
                    let current = form.get_untracked().category;
                    collection.set(add_to_collection_if_missing(fetched, [current]));
                }
                Err(e) => log::error!("loading categories failed: {e}"),
            }
        });

        let collection = self.employees_shared_collection;
        let employees = self.employees.clone();
        spawn_local(async move {
            match employees.query().await {
                Ok(fetched) => {
                    let current = form.get_untracked().employee;
                    collection.set(add_to_collection_if_missing(fetched, [current]));
                }
                Err(e) => log::error!("loading employees failed: {e}"),
            }
        });
    }

    /// Create or update from the current form values, then navigate back on
    /// success. A failed save only drops the saving flag.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        self.is_saving.set(true);
        let is_saving = self.is_saving;
        let payload = self.form.get_untracked().to_entity();
        let resource = self.competences.clone();
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::marker::PhantomData;

    /// Resource fake that never answers; the tests below only exercise the
    /// synchronous side of the view model.
    #[derive(Clone)]
    struct Offline<T>(PhantomData<T>);

    impl<T> Default for Offline<T> {
        fn default() -> Self {
            Self(PhantomData)
        }
    }

    impl<T: Identified> EntityResource for Offline<T> {
        type Entity = T;

        async fn query(&self) -> Result<Vec<T>, String> {
            Err("offline".into())
        }

        async fn find(&self, _id: i64) -> Result<T, String> {
            Err("offline".into())
        }

        async fn create(&self, _entity: &T) -> Result<T, String> {
            Err("offline".into())
        }

        async fn update(&self, _entity: &T) -> Result<T, String> {
            Err("offline".into())
        }

        async fn delete(&self, _id: i64) -> Result<(), String> {
            Err("offline".into())
        }
    }

    fn vm() -> CompetenceUpdateViewModel<Offline<Competence>, Offline<Category>, Offline<Employee>>
    {
        CompetenceUpdateViewModel::new(Offline::default(), Offline::default(), Offline::default())
    }

    fn category(id: i64) -> Category {
        Category {
            id: Some(id),
            ..Category::default()
        }
    }

    fn employee(id: i64) -> Employee {
        Employee {
            id: Some(id),
            ..Employee::default()
        }
    }

    #[test]
    fn apply_entity_populates_form_and_collections() {
        let vm = vm();
        let competence = Competence {
            id: Some(456),
            category: Some(category(96675)),
            employee: Some(employee(47567)),
            ..Competence::default()
        };

        vm.apply_entity(competence);

        let form = vm.form.get_untracked();
        assert_eq!(form.id, Some(456));
        assert_eq!(form.category.as_ref().and_then(|c| c.id), Some(96675));
        assert_eq!(form.employee.as_ref().and_then(|e| e.id), Some(47567));

        assert!(vm
            .categories_shared_collection
            .get_untracked()
            .iter()
            .any(|c| c.id == Some(96675)));
        assert!(vm
            .employees_shared_collection
            .get_untracked()
            .iter()
            .any(|e| e.id == Some(47567)));
    }

    #[test]
    fn apply_entity_does_not_duplicate_a_reference_already_listed() {
        let vm = vm();
        vm.categories_shared_collection.set(vec![category(96675)]);

        vm.apply_entity(Competence {
            id: Some(456),
            category: Some(category(96675)),
            ..Competence::default()
        });

        assert_eq!(vm.categories_shared_collection.get_untracked().len(), 1);
    }

    #[test]
    fn payload_is_built_from_the_form_fields() {
        let form = CompetenceForm {
            id: Some(123),
            name: Some("Rust".into()),
            level: Some(4),
            category: Some(category(7)),
            employee: None,
        };

        let payload = form.to_entity();

        assert_eq!(payload.id, Some(123));
        assert_eq!(payload.name.as_deref(), Some("Rust"));
        assert_eq!(payload.level, Some(4));
        assert_eq!(payload.category.as_ref().and_then(|c| c.id), Some(7));
        assert_eq!(payload.employee, None);
    }

    #[test]
    fn track_helpers_return_the_primary_key() {
        assert_eq!(track_category_by_id(&category(123)), 123);
        assert_eq!(track_employee_by_id(&employee(123)), 123);
    }
}
