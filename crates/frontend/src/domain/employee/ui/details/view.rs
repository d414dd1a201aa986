use super::view_model::EmployeeUpdateViewModel;
use crate::domain::employee::api::EmployeeApi;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn EmployeeDetails(
    id: Option<i64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = EmployeeUpdateViewModel::new(EmployeeApi);
    vm.initialize(id);

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    view! {
        <div class="details-container employee-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit employee" } else { "New employee" }
                    }
                </h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="employee-name">{"Name"}</label>
                    <input
                        type="text"
                        id="employee-name"
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
                        placeholder="Last name"
                    />
                </div>

                <div class="form-group">
                    <label for="employee-first-name">{"First name"}</label>
                    <input
                        type="text"
                        id="employee-first-name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().first_name.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.first_name = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="First name"
                    />
                </div>

                <div class="form-group">
                    <label for="employee-address">{"Address"}</label>
                    <input
                        type="text"
                        id="employee-address"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().address.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.address = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="Address"
                    />
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
