//! Plant form shared by the add and update pages.
//!
//! DESIGN
//! ======
//! The form edits a `RwSignal<PlantForm>` of raw strings; the page owns
//! validation (`PlantForm::to_new_plant`) and the network call, so the same
//! fields serve both create and update.

use leptos::prelude::*;

use crate::net::types::CareLevel;
use crate::util::validation::PlantForm;

/// Category choices offered in the form.
pub const CATEGORIES: [&str; 5] = ["succulent", "fern", "flowering", "herb", "foliage"];
/// Health status choices offered in the form.
pub const HEALTH_STATUSES: [&str; 4] = ["Healthy", "Needs attention", "Recovering", "Sick"];

type Getter = fn(&PlantForm) -> &String;
type Setter = fn(&mut PlantForm) -> &mut String;

#[component]
pub fn PlantFormFields(
    form: RwSignal<PlantForm>,
    #[prop(into)] submit_label: String,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !busy.get_untracked() {
            on_submit.run(());
        }
    };

    view! {
        <form class="plant-form" on:submit=on_form_submit>
            <div class="plant-form__grid">
                {text_field(form, "Plant name", "text", |f| &f.plant_name, |f| &mut f.plant_name)}
                {text_field(form, "Image URL", "url", |f| &f.image, |f| &mut f.image)}
                {select_field(form, "Category", owned(&CATEGORIES), |f| &f.category, |f| &mut f.category)}
                {select_field(
                    form,
                    "Care level",
                    CareLevel::CHOICES.iter().map(|c| c.as_str().to_owned()).collect(),
                    |f| &f.care_level,
                    |f| &mut f.care_level,
                )}
                {text_field(form, "Watering frequency", "text", |f| &f.watering_frequency, |f| &mut f.watering_frequency)}
                {select_field(form, "Health status", owned(&HEALTH_STATUSES), |f| &f.health_status, |f| &mut f.health_status)}
                {text_field(form, "Last watered", "date", |f| &f.last_watered_date, |f| &mut f.last_watered_date)}
                {text_field(form, "Next watering", "date", |f| &f.next_watering_date, |f| &mut f.next_watering_date)}
            </div>
            <label class="form-field form-field--wide">
                <span class="form-field__label">"Description"</span>
                <textarea
                    class="form-input"
                    rows="4"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.description = value);
                    }
                ></textarea>
            </label>
            <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving...".to_owned() } else { submit_label.clone() }}
            </button>
        </form>
    }
}

fn text_field(form: RwSignal<PlantForm>, label: &'static str, kind: &'static str, get: Getter, set: Setter) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-input"
                type=kind
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *set(f) = value);
                }
            />
        </label>
    }
}

fn owned(choices: &[&str]) -> Vec<String> {
    choices.iter().map(|c| (*c).to_owned()).collect()
}

fn select_field(form: RwSignal<PlantForm>, label: &'static str, mut choices: Vec<String>, get: Getter, set: Setter) -> impl IntoView {
    // Keep values stored by older records selectable.
    let current = form.with_untracked(|f| get(f).clone());
    if !current.is_empty() && !choices.contains(&current) {
        choices.push(current);
    }
    let options = choices
        .into_iter()
        .map(|choice| {
            view! { <option value=choice.clone()>{choice.clone()}</option> }
        })
        .collect_view();

    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-input"
                prop:value=move || form.with(|f| get(f).clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *set(f) = value);
                }
            >
                <option value="" disabled=true>"Select..."</option>
                {options}
            </select>
        </label>
    }
}
