//! Shared shell for every admin view: the admin guard plus the sidebar of
//! manager links.

use dioxus::prelude::*;

use ui::RequireAdmin;

use crate::Route;

#[component]
pub fn AdminShell(title: String, children: Element) -> Element {
    rsx! {
        RequireAdmin {
            div {
                class: "admin-layout",

                aside {
                    class: "admin-sidebar",
                    h3 { "Admin" }
                    nav {
                        Link { to: Route::AdminDashboard {}, "Dashboard" }
                        Link { to: Route::AdminNotices {}, "Notices" }
                        Link { to: Route::AdminServices {}, "Applications" }
                        Link { to: Route::AdminSchemes {}, "Schemes" }
                        Link { to: Route::AdminGallery {}, "Gallery" }
                        Link { to: Route::AdminComplaints {}, "Complaints" }
                        Link { to: Route::AdminDevelopment {}, "Development" }
                        Link { to: Route::AdminContacts {}, "Contacts" }
                        Link { to: Route::AdminVillage {}, "Village Profile" }
                    }
                }

                section {
                    class: "admin-content",
                    h2 { class: "page-title", "{title}" }
                    {children}
                }
            }
        }
    }
}
