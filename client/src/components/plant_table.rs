//! Plant listing table and its sort selector.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::net::plants::{PlantSort, needs_water};
use crate::net::types::Plant;
use crate::routes::AppRoute;

/// Dropdown bound to a `PlantSort` signal.
#[component]
pub fn PlantSortSelect(sort: RwSignal<PlantSort>) -> impl IntoView {
    view! {
        <label class="sort-select">
            <span>"Sort by"</span>
            <select
                class="form-input"
                prop:value=move || sort.get().key()
                on:change=move |ev| sort.set(PlantSort::from_key(&event_target_value(&ev)))
            >
                {PlantSort::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.key()>{s.label()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Table of plants with a details link per row.
///
/// With `on_delete` set, rows also get update and delete actions.
#[component]
pub fn PlantTable(
    plants: Vec<Plant>,
    today: Option<NaiveDate>,
    #[prop(optional)] show_owner: bool,
    #[prop(optional)] on_delete: Option<Callback<Plant>>,
) -> impl IntoView {
    if plants.is_empty() {
        return view! { <p class="empty-state">"No plants to show yet."</p> }.into_any();
    }

    let rows = plants
        .into_iter()
        .enumerate()
        .map(|(index, plant)| {
            let thirsty = needs_water(&plant, today);
            let details_href = AppRoute::PlantDetails(plant.id.clone()).href();
            let update_href = AppRoute::UpdatePlant(plant.id.clone()).href();
            let d = &plant.details;
            let owner = if d.user_name.is_empty() { d.user_email.clone() } else { d.user_name.clone() };
            let actions = on_delete.map(|on_delete| {
                let plant = plant.clone();
                view! {
                    <a class="btn btn--small" href=update_href>"Update"</a>
                    <button
                        class="btn btn--small btn--danger"
                        on:click=move |_| on_delete.run(plant.clone())
                    >
                        "Delete"
                    </button>
                }
            });

            view! {
                <tr class:plant-row--thirsty=thirsty>
                    <td>{index + 1}</td>
                    <td class="plant-table__name">
                        {(!d.image.is_empty()).then(|| view! { <img class="plant-table__thumb" src=d.image.clone() alt=""/> })}
                        <span>{d.plant_name.clone()}</span>
                    </td>
                    <td>{d.category.clone()}</td>
                    <td>
                        <span class=format!("care-badge care-badge--{}", d.care_level.as_str())>
                            {d.care_level.as_str().to_owned()}
                        </span>
                    </td>
                    <td>{d.watering_frequency.clone()}</td>
                    <td>
                        {d.next_watering_date.clone()}
                        {thirsty.then(|| view! { <span class="water-flag" title="Needs water">" 💧"</span> })}
                    </td>
                    {show_owner.then(|| view! { <td>{owner}</td> })}
                    <td class="plant-table__actions">
                        <a class="btn btn--small btn--ghost" href=details_href>"View details"</a>
                        {actions}
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="plant-table__wrap">
            <table class="plant-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Plant"</th>
                        <th>"Category"</th>
                        <th>"Care level"</th>
                        <th>"Watering"</th>
                        <th>"Next watering"</th>
                        {show_owner.then(|| view! { <th>"Owner"</th> })}
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}
