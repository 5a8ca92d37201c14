//! Manage the village profile singleton: one pre-filled form, saved in
//! place. Values round-trip to the public About page.

use dioxus::prelude::*;

use domain::models::VillageProfileInfo;
use ui::{friendly_error, use_toasts};

use super::AdminShell;

#[component]
pub fn AdminVillage() -> Element {
    let toasts = use_toasts();
    let mut form = use_signal(VillageProfileInfo::default);
    let mut loaded = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Pre-fill from the stored profile on mount.
    let _loader = use_resource(move || async move {
        match api::get_village_profile().await {
            Ok(Some(profile)) => form.set(profile),
            Ok(None) => {}
            Err(e) => toasts.error(friendly_error(&e)),
        }
        loaded.set(true);
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let profile = form();
            if profile.name.trim().is_empty() {
                toasts.error("Village name is required");
                return;
            }
            if profile.population_male + profile.population_female > profile.population_total {
                toasts.error("Male and female population cannot exceed the total");
                return;
            }

            saving.set(true);
            match api::save_village_profile(profile).await {
                Ok(saved) => {
                    form.set(saved);
                    toasts.success("✨ Village profile saved");
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
            saving.set(false);
        });
    };

    let parse_u32 = |value: String| value.trim().parse::<u32>().unwrap_or(0);

    rsx! {
        AdminShell {
            title: "Village Profile",

            if !loaded() {
                p { class: "loading-text", "Loading profile..." }
            } else {
                form {
                    class: "admin-form form-container",
                    onsubmit: handle_save,

                    label { "Village name *" }
                    input {
                        r#type: "text",
                        value: form().name,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }

                    label { "History" }
                    textarea {
                        rows: 4,
                        value: form().history,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().history = evt.value(),
                    }

                    label { "Total population" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{form().population_total}",
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().population_total = parse_u32(evt.value()),
                    }

                    label { "Male population" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{form().population_male}",
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().population_male = parse_u32(evt.value()),
                    }

                    label { "Female population" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{form().population_female}",
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().population_female = parse_u32(evt.value()),
                    }

                    label { "Area" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. 1,240 hectares",
                        value: form().area,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().area = evt.value(),
                    }

                    label { "Description" }
                    textarea {
                        rows: 4,
                        value: form().description,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().description = evt.value(),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "💾 Save Profile" }
                    }
                }
            }
        }
    }
}
