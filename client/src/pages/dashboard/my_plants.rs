//! The signed-in user's plants, with update and delete actions.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::plant_table::{PlantSortSelect, PlantTable};
use crate::components::toast::{notify_error, notify_success};
use crate::config::ClientConfig;
use crate::net::plants::{PlantSort, delete_plant, fetch_my_plants, sort_plants};
use crate::net::types::Plant;
use crate::pages::{Loading, load_into};
use crate::routes::AppRoute;
use crate::state::notice::NoticeState;
use crate::state::plants::{LoadState, fetch_error_message};
use crate::state::session::Session;
use crate::util::clock;

#[component]
pub fn MyPlantsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let plants = RwSignal::new(LoadState::<Vec<Plant>>::default());
    let sort = RwSignal::new(PlantSort::default());
    let pending_delete = RwSignal::new(None::<Plant>);
    let today = clock::today();

    let email = session.with_untracked(|s| s.email().unwrap_or_default().to_owned());
    let base = config.plants_api_url.clone();
    load_into(plants, async move { fetch_my_plants(&base, &email).await });

    let on_delete_request = Callback::new(move |plant: Plant| pending_delete.set(Some(plant)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(plant) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let base = config.plants_api_url.clone();
        leptos::task::spawn_local(async move {
            match delete_plant(&base, &plant.id).await {
                Ok(_) => {
                    plants.update(|state| state.update_ready(|list| list.retain(|p| p.id != plant.id)));
                    notify_success(notices, "Plant deleted");
                }
                Err(e) => notify_error(notices, "Could not delete plant", &e),
            }
        });
    });

    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|p| format!("\"{}\" will be removed permanently.", p.details.plant_name))
            .unwrap_or_default()
    });

    view! {
        <section class="section">
            <div class="section__header">
                <h2 class="section__title">"My Plants"</h2>
                <PlantSortSelect sort/>
                <a class="btn" href=AppRoute::AddPlant.path()>"+ Add Plant"</a>
            </div>
            {move || match plants.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed(e) => view! { <p class="error-text">{fetch_error_message(&e)}</p> }.into_any(),
                LoadState::Ready(mut mine) => {
                    sort_plants(&mut mine, sort.get());
                    view! { <PlantTable plants=mine today on_delete=on_delete_request/> }.into_any()
                }
            }}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete this plant?"
                    message=delete_message
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </section>
    }
}
