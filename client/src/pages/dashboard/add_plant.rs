//! Add-plant form. The new plant is owned by the signed-in user.

#[cfg(test)]
#[path = "add_plant_test.rs"]
mod add_plant_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::plant_form::PlantFormFields;
use crate::components::toast::{notify_error, notify_success};
use crate::config::ClientConfig;
use crate::net::plants::create_plant;
use crate::routes::AppRoute;
use crate::state::notice::NoticeState;
use crate::state::session::Session;
use crate::util::validation::PlantForm;

/// Owner email and name stamped onto plants the user creates.
pub(crate) fn owner_of(session: &Session) -> (String, String) {
    let email = session.email().unwrap_or_default().to_owned();
    let name = session.user.as_ref().map(|u| u.label()).unwrap_or_default();
    (email, name)
}

#[component]
pub fn AddPlantPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(PlantForm { care_level: "easy".to_owned(), ..PlantForm::default() });
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        let (email, name) = session.with_untracked(owner_of);
        let plant = match form.with_untracked(|f| f.to_new_plant(&email, &name)) {
            Ok(plant) => plant,
            Err(msg) => {
                notify_error(notices, "Invalid plant", msg);
                return;
            }
        };
        busy.set(true);
        let base = config.plants_api_url.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match create_plant(&base, &plant).await {
                Ok(_) => {
                    notify_success(notices, "Plant added successfully!");
                    form.set(PlantForm::default());
                    navigate(AppRoute::MyPlants.path(), NavigateOptions::default());
                }
                Err(e) => notify_error(notices, "Could not add plant", &e),
            }
            busy.set(false);
        });
    });

    view! {
        <section class="section section--narrow">
            <h2 class="section__title">"Add a New Plant"</h2>
            <PlantFormFields form submit_label="Add Plant" busy on_submit/>
        </section>
    }
}
