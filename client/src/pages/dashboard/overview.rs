//! Dashboard landing page with plant counts.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::plants::{fetch_plants, needs_water, plant_stats};
use crate::net::types::Plant;
use crate::pages::{Loading, load_into};
use crate::routes::AppRoute;
use crate::state::plants::{LoadState, fetch_error_message};
use crate::state::session::Session;
use crate::util::clock;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let plants = RwSignal::new(LoadState::<Vec<Plant>>::default());
    load_into(plants, async move { fetch_plants(&config.plants_api_url).await });
    let today = clock::today();

    let greeting = move || session.with(|s| s.user.as_ref().map(|u| u.label()).unwrap_or_default());

    view! {
        <section class="overview">
            <p class="overview__greeting">"Welcome back, " {greeting} "!"</p>
            {move || match plants.get() {
                LoadState::Loading => view! { <Loading/> }.into_any(),
                LoadState::Failed(e) => view! { <p class="error-text">{fetch_error_message(&e)}</p> }.into_any(),
                LoadState::Ready(all) => {
                    let email = session.with(|s| s.email().map(str::to_owned));
                    let stats = plant_stats(&all, email.as_deref(), today);
                    let thirsty: Vec<Plant> = all
                        .into_iter()
                        .filter(|p| needs_water(p, today))
                        .filter(|p| email.as_deref().is_some_and(|e| p.details.user_email.eq_ignore_ascii_case(e)))
                        .collect();
                    view! {
                        <div class="stat-cards">
                            <StatCard label="All plants" value=stats.total/>
                            <StatCard label="My plants" value=stats.mine/>
                            <StatCard label="Need water" value=stats.needs_water/>
                            <StatCard label="Difficult care" value=stats.difficult/>
                        </div>
                        <h2 class="section__title">"Your plants needing water"</h2>
                        {if thirsty.is_empty() {
                            view! { <p class="empty-state">"Everything is watered. Nice work!"</p> }.into_any()
                        } else {
                            view! {
                                <ul class="thirsty-list">
                                    {thirsty
                                        .into_iter()
                                        .map(|p| {
                                            let href = AppRoute::PlantDetails(p.id.clone()).href();
                                            view! {
                                                <li>
                                                    <a href=href>{p.details.plant_name}</a>
                                                    <span class="thirsty-list__date">{p.details.next_watering_date}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any()
                        }}
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn StatCard(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
