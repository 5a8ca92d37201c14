use dioxus::prelude::*;

/// Top navigation shell. The web package fills it with typed router links.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {children}
        }
    }
}
