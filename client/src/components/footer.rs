use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"🌿 PlantCare"</span>
                <p>"Track watering, health and care for every plant you own."</p>
            </div>
            <nav class="footer__links">
                <a href=AppRoute::About.path()>"About"</a>
                <a href=AppRoute::Contact.path()>"Contact"</a>
                <a href=AppRoute::Support.path()>"Support"</a>
                <a href=AppRoute::AllPlants.path()>"All Plants"</a>
            </nav>
            <p class="footer__copy">"© PlantCare. All rights reserved."</p>
        </footer>
    }
}
