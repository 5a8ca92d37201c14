use dioxus::prelude::*;

use ui::friendly_error;

#[component]
pub fn Gallery() -> Element {
    let images = use_resource(move || async move { api::list_gallery().await });

    rsx! {
        div {
            class: "page-section",
            h2 { class: "page-title", "📷 Village Gallery" }

            match images() {
                None => rsx! {
                    p { class: "loading-text", "Loading gallery..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "empty-state", p { "No photos yet" } }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "gallery-grid",
                        for image in list {
                            figure {
                                class: "gallery-item",
                                img {
                                    src: "{image.url}",
                                    alt: image.caption.clone().unwrap_or_else(|| "Village photo".to_string()),
                                    loading: "lazy",
                                }
                                if let Some(ref caption) = image.caption {
                                    figcaption { "{caption}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
