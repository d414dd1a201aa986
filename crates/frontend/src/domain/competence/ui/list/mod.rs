use crate::domain::competence::api::CompetenceApi;
use crate::domain::competence::ui::details::CompetenceDetails;
use crate::shared::icons::icon;
use crate::shared::resource::EntityResource;
use contracts::domain::competence::Competence;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug)]
pub struct CompetenceRow {
    pub id: i64,
    pub name: String,
    pub level: String,
    pub category: String,
    pub employee: String,
}

impl From<Competence> for CompetenceRow {
    fn from(c: Competence) -> Self {
        Self {
            id: c.id.unwrap_or_default(),
            name: c.name.unwrap_or_default(),
            level: c.level.map(|l| l.to_string()).unwrap_or_default(),
            category: c
                .category
                .and_then(|category| category.name)
                .unwrap_or_default(),
            employee: c
                .employee
                .and_then(|employee| employee.name)
                .unwrap_or_default(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CompetenceList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CompetenceRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_details, set_show_details) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);

    let fetch = move || {
        spawn_local(async move {
            match CompetenceApi.query().await {
                Ok(v) => {
                    let rows: Vec<CompetenceRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_create_new = move || {
        set_editing_id.set(None);
        set_show_details.set(true);
    };

    let handle_edit = move |id: i64| {
        set_editing_id.set(Some(id));
        set_show_details.set(true);
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this competence?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match CompetenceApi.delete(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Competences"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"New competence"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"ID"}</th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Level"}</th>
                            <th class="table__header-cell">{"Category"}</th>
                            <th class="table__header-cell">{"Employee"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id;
                            view! {
                                <tr class="table__row" on:click=move |_| handle_edit(id)>
                                    <td class="table__cell">{id}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.level}</td>
                                    <td class="table__cell">{row.category}</td>
                                    <td class="table__cell">{row.employee}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--danger"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                handle_delete(id);
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_details.get()>
                {move || {
                    let on_saved = Rc::new(move |_| {
                        set_show_details.set(false);
                        fetch();
                    });
                    let on_cancel = Rc::new(move |_| set_show_details.set(false));
                    view! {
                        <div class="details-overlay">
                            <CompetenceDetails
                                id=editing_id.get()
                                on_saved=on_saved
                                on_cancel=on_cancel
                            />
                        </div>
                    }
                }}
            </Show>
        </div>
    }
}
