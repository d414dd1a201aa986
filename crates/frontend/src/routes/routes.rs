use std::collections::HashMap;

use crate::domain::category::ui::list::CategoryList;
use crate::domain::competence::ui::list::CompetenceList;
use crate::domain::employee::ui::list::EmployeeList;
use leptos::prelude::*;
use web_sys::window;

/// Top-level screens of the app, one per entity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Competences,
    Categories,
    Employees,
}

impl Section {
    const ALL: [Section; 3] = [Section::Competences, Section::Categories, Section::Employees];

    fn key(self) -> &'static str {
        match self {
            Section::Competences => "competence",
            Section::Categories => "category",
            Section::Employees => "employee",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Section::Competences => "Competences",
            Section::Categories => "Categories",
            Section::Employees => "Employees",
        }
    }

    fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Section restored from the `?active=` query parameter, if present.
fn initial_section() -> Section {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .and_then(|key| Section::from_key(key))
        .unwrap_or(Section::Competences)
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (section, set_section) = signal(initial_section());

    // Keep ?active=<section> in sync so a reload lands on the same screen.
    Effect::new(move |_| {
        let active = section.get();
        let query_string = serde_qs::to_string(&HashMap::from([(
            "active".to_string(),
            active.key().to_string(),
        )]))
        .unwrap_or_default();
        let new_url = format!("?{}", query_string);

        let current_search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if current_search != new_url {
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        }
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1 class="app-header__title">{"Competence Manager"}</h1>
                <nav class="app-header__nav">
                    {Section::ALL
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button
                                    class="app-header__link"
                                    class:app-header__link--active=move || section.get() == item
                                    on:click=move |_| set_section.set(item)
                                >
                                    {item.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            <main class="app-main">
                {move || match section.get() {
                    Section::Categories => view! { <CategoryList /> }.into_any(),
                    Section::Competences => view! { <CompetenceList /> }.into_any(),
                    Section::Employees => view! { <EmployeeList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
