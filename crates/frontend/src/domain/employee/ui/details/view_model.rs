use std::rc::Rc;

use contracts::domain::employee::Employee;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::resource::{settle_save, EntityResource};

/// Form-backing state for the employee editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub address: Option<String>,
}

impl EmployeeForm {
    pub fn from_entity(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            first_name: employee.first_name,
            address: employee.address,
        }
    }

    /// Payload for create/update, built from the current field values.
    pub fn to_entity(&self) -> Employee {
        Employee {
            id: self.id,
            name: self.name.clone(),
            first_name: self.first_name.clone(),
            address: self.address.clone(),
            competences: None,
        }
    }
}

/// ViewModel for the employee editor.
#[derive(Clone)]
pub struct EmployeeUpdateViewModel<R>
where
    R: EntityResource<Entity = Employee> + Clone + 'static,
{
    resource: R,
    pub form: RwSignal<EmployeeForm>,
    pub is_saving: RwSignal<bool>,
}

impl<R> EmployeeUpdateViewModel<R>
where
    R: EntityResource<Entity = Employee> + Clone + 'static,
{
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            form: RwSignal::new(EmployeeForm::default()),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn apply_entity(&self, employee: Employee) {
        self.form.set(EmployeeForm::from_entity(employee));
    }

    /// Load the entity when editing; a create screen starts from the empty form.
    pub fn initialize(&self, id: Option<i64>) {
        let Some(existing) = id else {
            return;
        };
        let vm = self.clone();
        spawn_local(async move {
            match vm.resource.find(existing).await {
                Ok(employee) => vm.apply_entity(employee),
                Err(e) => log::error!("loading employee {existing} failed: {e}"),
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
