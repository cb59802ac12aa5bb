//! Landing page: hero banner, newest plants, care tips.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::plants::{fetch_plants, newest};
use crate::net::types::Plant;
use crate::pages::{Loading, load_into};
use crate::routes::AppRoute;
use crate::state::plants::{LoadState, fetch_error_message};

/// How many recent plants the home page features.
pub const NEWEST_LIMIT: usize = 6;

const TIPS: [(&str, &str); 3] = [
    ("Water wisely", "Check the soil first. Most houseplants prefer drying out slightly between waterings."),
    ("Find the light", "Rotate pots every few weeks so every side gets its share of the sun."),
    ("Watch the leaves", "Yellowing leaves often mean too much water; crispy edges mean too little."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let plants = RwSignal::new(LoadState::<Vec<Plant>>::default());
    load_into(plants, async move { fetch_plants(&config.plants_api_url).await });

    view! {
        <section class="hero">
            <div class="hero__text">
                <h1>"Keep every plant thriving"</h1>
                <p>"Log your plants, track watering schedules and never miss a thirsty leaf again."</p>
                <div class="hero__actions">
                    <a class="btn" href=AppRoute::AddPlant.path()>"Add a plant"</a>
                    <a class="btn btn--ghost" href=AppRoute::AllPlants.path()>"Browse plants"</a>
                </div>
            </div>
        </section>

        <section class="section">
            <h2 class="section__title">"New Plants"</h2>
            {move || match plants.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed(e) => view! { <p class="error-text">{fetch_error_message(&e)}</p> }.into_any(),
                LoadState::Ready(all) => view! {
                    <div class="plant-cards">
                        {newest(&all, NEWEST_LIMIT).into_iter().map(|plant| view! { <PlantCard plant/> }).collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>

        <section class="section">
            <h2 class="section__title">"Plant Care Tips"</h2>
            <div class="tips">
                {TIPS
                    .into_iter()
                    .map(|(title, text)| view! {
                        <article class="tip">
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PlantCard(plant: Plant) -> impl IntoView {
    let href = AppRoute::PlantDetails(plant.id.clone()).href();
    let d = plant.details;
    view! {
        <article class="plant-card">
            <img class="plant-card__image" src=d.image alt=d.plant_name.clone()/>
            <div class="plant-card__body">
                <h3>{d.plant_name}</h3>
                <p class="plant-card__meta">
                    <span>{d.category}</span>
                    <span class=format!("care-badge care-badge--{}", d.care_level.as_str())>
                        {d.care_level.as_str().to_owned()}
                    </span>
                </p>
                <a class="btn btn--small" href=href>"View details"</a>
            </div>
        </article>
    }
}
