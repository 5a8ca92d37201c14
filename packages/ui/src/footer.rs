use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            p { "Gram Panchayat Portal" }
            p {
                class: "footer-muted",
                "Office hours: Mon–Sat, 10:00–17:00"
            }
        }
    }
}
