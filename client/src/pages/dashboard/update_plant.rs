//! Update form for one plant, loaded by id from the route.
//!
//! DESIGN
//! ======
//! The form only renders once the plant has loaded. A failed fetch shows an
//! error panel with a way back to My Plants instead of an empty form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::plant_form::PlantFormFields;
use crate::components::toast::{notify_error, notify_success};
use crate::config::ClientConfig;
use crate::net::plants::{fetch_plant, update_plant};
use crate::net::types::Plant;
use crate::pages::dashboard::add_plant::owner_of;
use crate::pages::{Loading, load_into};
use crate::routes::AppRoute;
use crate::state::notice::NoticeState;
use crate::state::plants::{LoadState, fetch_error_message};
use crate::state::session::Session;
use crate::util::validation::PlantForm;

#[component]
pub fn UpdatePlantPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let plant = RwSignal::new(LoadState::<Plant>::default());
    let form = RwSignal::new(PlantForm::default());
    let busy = RwSignal::new(false);

    let base = config.plants_api_url.clone();
    Effect::new(move || {
        let id = id.get();
        let base = base.clone();
        plant.set(LoadState::Loading);
        load_into(plant, async move {
            let result = fetch_plant(&base, &id).await;
            // Prefill before the form renders.
            if let Ok(loaded) = &result {
                form.set(PlantForm::from_plant(&loaded.details));
            }
            result
        });
    });

    let on_submit = Callback::new(move |()| {
        let Some(existing) = plant.with_untracked(|p| p.ready().cloned()) else {
            return;
        };
        // Keep the original owner; fall back to the editor for legacy records.
        let (email, name) = if existing.details.user_email.is_empty() {
            session.with_untracked(owner_of)
        } else {
            (existing.details.user_email.clone(), existing.details.user_name.clone())
        };
        let update = match form.with_untracked(|f| f.to_new_plant(&email, &name)) {
            Ok(update) => update,
            Err(msg) => {
                notify_error(notices, "Invalid plant", msg);
                return;
            }
        };
        busy.set(true);
        let base = config.plants_api_url.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match update_plant(&base, &existing.id, &update).await {
                Ok(_) => {
                    notify_success(notices, "Plant updated successfully!");
                    navigate(AppRoute::MyPlants.path(), NavigateOptions::default());
                }
                Err(e) => notify_error(notices, "Update failed", &e),
            }
            busy.set(false);
        });
    });

    view! {
        <section class="section section--narrow">
            <h2 class="section__title">"Update Plant"</h2>
            {move || match plant.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed(e) => view! {
                    <div class="error-panel" role="alert">
                        <h3>"Could not load this plant"</h3>
                        <p>{fetch_error_message(&e)}</p>
                        <a class="btn" href=AppRoute::MyPlants.path()>"Back to My Plants"</a>
                    </div>
                }
                .into_any(),
                LoadState::Ready(_) => view! {
                    <PlantFormFields form submit_label="Update Plant" busy on_submit/>
                }
                .into_any(),
            }}
        </section>
    }
}
