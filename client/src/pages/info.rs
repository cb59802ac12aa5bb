//! Static information pages.

use leptos::prelude::*;

use crate::components::toast::notify_success;
use crate::state::notice::NoticeState;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="section prose">
            <h1>"About PlantCare"</h1>
            <p>
                "PlantCare is a small tracker for people who love plants. Keep a list of what "
                "you grow, when it was last watered and when it needs water next."
            </p>
            <p>"Browse what other growers keep, and share care notes for each of your own plants."</p>
        </section>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(String::new());
        notify_success(notices, "Message sent! We'll get back to you soon.");
    };

    view! {
        <section class="section prose">
            <h1>"Contact"</h1>
            <p>"Questions, ideas or a plant emergency? Drop us a line."</p>
            <form class="contact-form" on:submit=on_submit>
                <input class="form-input" type="text" placeholder="Your name" required=true/>
                <input class="form-input" type="email" placeholder="Your email" required=true/>
                <textarea
                    class="form-input"
                    rows="5"
                    placeholder="Message"
                    required=true
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button class="btn" type="submit">"Send"</button>
            </form>
        </section>
    }
}

const FAQ: [(&str, &str); 3] = [
    ("How do I add a plant?", "Sign in, open the dashboard and choose Add Plant."),
    ("Can I edit a plant later?", "Yes. My Plants lists everything you added, each with Update and Delete."),
    ("What does the water drop mean?", "The plant's next watering date is today or already past."),
];

#[component]
pub fn SupportPage() -> impl IntoView {
    view! {
        <section class="section prose">
            <h1>"Support"</h1>
            {FAQ
                .into_iter()
                .map(|(q, a)| view! {
                    <details class="faq">
                        <summary>{q}</summary>
                        <p>{a}</p>
                    </details>
                })
                .collect_view()}
        </section>
    }
}
