use super::view_model::{track_category_by_id, track_employee_by_id, CompetenceUpdateViewModel};
use crate::domain::category::api::CategoryApi;
use crate::domain::competence::api::CompetenceApi;
use crate::domain::employee::api::EmployeeApi;
use crate::shared::icons::icon;
use contracts::domain::category::Category;
use contracts::domain::employee::Employee;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn CompetenceDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CompetenceUpdateViewModel::new(CompetenceApi, CategoryApi, EmployeeApi);
    vm.initialize(id);

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container competence-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit competence" } else { "New competence" }
                    }
                </h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="competence-name">{"Name"}</label>
                    <input
                        type="text"
                        id="competence-name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.name = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="Competence name"
                    />
                </div>

                <div class="form-group">
                    <label for="competence-level">{"Level"}</label>
                    <input
                        type="number"
                        id="competence-level"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().level.map(|l| l.to_string()).unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let parsed = event_target_value(&ev).parse::<i32>().ok();
                                vm.form.update(|f| f.level = parsed);
                            }
                        }
                        placeholder="1-5"
                    />
                </div>

                <div class="form-group">
                    <label for="competence-category">{"Category"}</label>
                    <select
                        id="competence-category"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let selected = event_target_value(&ev).parse::<i64>().ok().and_then(|id| {
                                    vm.categories_shared_collection
                                        .get_untracked()
                                        .into_iter()
                                        .find(|c| c.id == Some(id))
                                });
                                vm.form.update(|f| f.category = selected);
                            }
                        }
                    >
                        <option
                            value=""
                            selected={
                                let vm = vm_clone.clone();
                                move || vm.form.get().category.is_none()
                            }
                        >
                            {""}
                        </option>
                        <For
                            each={
                                let vm = vm_clone.clone();
                                move || vm.categories_shared_collection.get()
                            }
                            key=|category| track_category_by_id(category)
                            children={
                                let vm = vm_clone.clone();
                                move |category: Category| {
                                    let id = track_category_by_id(&category);
                                    let label = category.name.clone().unwrap_or_else(|| id.to_string());
                                    let vm = vm.clone();
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || {
                                                vm.form.get().category.as_ref().and_then(|c| c.id) == Some(id)
                                            }
                                        >
                                            {label}
                                        </option>
                                    }
                                }
                            }
                        />
                    </select>
                </div>

                <div class="form-group">
                    <label for="competence-employee">{"Employee"}</label>
                    <select
                        id="competence-employee"
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let selected = event_target_value(&ev).parse::<i64>().ok().and_then(|id| {
                                    vm.employees_shared_collection
                                        .get_untracked()
                                        .into_iter()
                                        .find(|e| e.id == Some(id))
                                });
                                vm.form.update(|f| f.employee = selected);
                            }
                        }
                    >
                        <option
                            value=""
                            selected={
                                let vm = vm_clone.clone();
                                move || vm.form.get().employee.is_none()
                            }
                        >
                            {""}
                        </option>
                        <For
                            each={
                                let vm = vm_clone.clone();
                                move || vm.employees_shared_collection.get()
                            }
                            key=|employee| track_employee_by_id(employee)
                            children={
                                let vm = vm_clone.clone();
                                move |employee: Employee| {
                                    let id = track_employee_by_id(&employee);
                                    let label = employee.name.clone().unwrap_or_else(|| id.to_string());
                                    let vm = vm.clone();
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || {
                                                vm.form.get().employee.as_ref().and_then(|e| e.id) == Some(id)
                                            }
                                        >
                                            {label}
                                        </option>
                                    }
                                }
                            }
                        />
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.is_saving.get()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Save" } else { "Create" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
