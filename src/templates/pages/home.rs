// templates/pages/home.rs

use crate::templates::{
    components::{hotspot, search_form, SearchFormVm, HOTSPOTS},
    desktop_layout,
};
use maud::{html, Markup};

/// Landing page. `form` is `Some` while the search modal is open.
pub fn home_page(city: &str, form: Option<&SearchFormVm>) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="landing" {
                div class="background" {
                    @for spot in &HOTSPOTS {
                        (hotspot(spot))
                    }

                    div class="center-container" {
                        div class="title-section" {
                            h1 class="main-title" { "Find Your" }
                            h1 class="accent-title" { (city) " Vibe" }
                        }

                        a class="search-button" href="/?search=open#search-form" {
                            span class="button-content" {
                                span class="search-emoji" { "🔍" }
                                "START EXPLORING"
                                span class="sparkle-emoji" { "✨" }
                            }
                        }

                        p class="subtitle" { "Discover neighborhoods that match your lifestyle" }
                    }

                    @if let Some(vm) = form {
                        (search_form(vm))
                    }
                }
            }
        },
    )
}
