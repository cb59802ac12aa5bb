//! Read-only view of one plant.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::config::ClientConfig;
use crate::net::plants::{fetch_plant, needs_water};
use crate::net::types::Plant;
use crate::pages::{Loading, load_into};
use crate::routes::AppRoute;
use crate::state::plants::{LoadState, fetch_error_message};
use crate::state::session::Session;
use crate::util::clock;

#[component]
pub fn PlantDetailsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let params = use_params_map();

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let plant = RwSignal::new(LoadState::<Plant>::default());
    let today = clock::today();

    let base = config.plants_api_url;
    Effect::new(move || {
        let id = id.get();
        let base = base.clone();
        plant.set(LoadState::Loading);
        load_into(plant, async move { fetch_plant(&base, &id).await });
    });

    view! {
        <section class="section">
            {move || match plant.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed(e) => view! {
                    <div class="error-panel" role="alert">
                        <p>{fetch_error_message(&e)}</p>
                        <a class="btn" href=AppRoute::DashboardAllPlants.path()>"Back to All Plants"</a>
                    </div>
                }
                .into_any(),
                LoadState::Ready(p) => {
                    let thirsty = needs_water(&p, today);
                    let is_owner = session.with(|s| {
                        s.email().is_some_and(|e| p.details.user_email.eq_ignore_ascii_case(e))
                    });
                    let update_href = AppRoute::UpdatePlant(p.id.clone()).href();
                    let d = p.details;
                    let rows = [
                        ("Category", d.category),
                        ("Care level", d.care_level.as_str().to_owned()),
                        ("Watering frequency", d.watering_frequency),
                        ("Last watered", d.last_watered_date),
                        ("Next watering", d.next_watering_date),
                        ("Health status", d.health_status),
                        ("Added by", if d.user_name.is_empty() { d.user_email } else { d.user_name }),
                    ];
                    view! {
                        <article class="plant-details">
                            <img class="plant-details__image" src=d.image alt=d.plant_name.clone()/>
                            <div class="plant-details__body">
                                <h2>{d.plant_name}</h2>
                                {thirsty.then(|| view! { <p class="water-flag">"💧 Needs water today"</p> })}
                                <p class="plant-details__description">{d.description}</p>
                                <dl class="plant-details__facts">
                                    {rows
                                        .into_iter()
                                        .map(|(label, value)| view! {
                                            <dt>{label}</dt>
                                            <dd>{value}</dd>
                                        })
                                        .collect_view()}
                                </dl>
                                {is_owner.then(|| view! { <a class="btn" href=update_href>"Update"</a> })}
                            </div>
                        </article>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
