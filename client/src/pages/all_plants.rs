//! Sortable table of every plant, on the public site and in the dashboard.

use leptos::prelude::*;

use crate::components::plant_table::{PlantSortSelect, PlantTable};
use crate::config::ClientConfig;
use crate::net::plants::{PlantSort, fetch_plants, sort_plants};
use crate::net::types::Plant;
use crate::pages::{Loading, load_into};
use crate::state::plants::{LoadState, fetch_error_message};
use crate::util::clock;

#[component]
pub fn AllPlantsPage() -> impl IntoView {
    view! { <AllPlantsView show_owner=false/> }
}

#[component]
pub fn DashboardAllPlantsPage() -> impl IntoView {
    view! { <AllPlantsView show_owner=true/> }
}

#[component]
fn AllPlantsView(show_owner: bool) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let plants = RwSignal::new(LoadState::<Vec<Plant>>::default());
    let sort = RwSignal::new(PlantSort::default());
    load_into(plants, async move { fetch_plants(&config.plants_api_url).await });
    let today = clock::today();

    view! {
        <section class="section">
            <div class="section__header">
                <h2 class="section__title">"All Plants"</h2>
                <PlantSortSelect sort/>
            </div>
            {move || match plants.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed(e) => view! { <p class="error-text">{fetch_error_message(&e)}</p> }.into_any(),
                LoadState::Ready(mut all) => {
                    sort_plants(&mut all, sort.get());
                    view! { <PlantTable plants=all today show_owner/> }.into_any()
                }
            }}
        </section>
    }
}
