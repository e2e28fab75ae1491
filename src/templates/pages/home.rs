// templates/pages/home.rs

use crate::domain::{SearchParams, SearchResult};
use crate::templates::{
    components::{demo_banner, pagination, property_card, search_form},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(params: &SearchParams, result: &SearchResult) -> Markup {
    desktop_layout(
        "Find Your Home | Home Search",
        "Search homes for sale and rent with real-time data.",
        html! {
            header class="hero" {
                div class="container" {
                    h1 { "Find your next home" }
                    p class="lead" {
                        "Search by city, state, or zip. Real property data when you add a RentCast API key."
                    }
                }
            }

            (search_form(params))

            main class="container results" {
                @if result.using_mock_data {
                    (demo_banner())
                }

                p class="result-count" {
                    (result.total) " " (if result.total == 1 { "property" } else { "properties" }) " found"
                }

                @if result.properties.is_empty() {
                    div class="empty-state" {
                        p { "No properties match your search." }
                        p class="hint" { "Try a different city, state, or ZIP." }
                    }
                } @else {
                    ul class="card-grid" {
                        @for p in &result.properties {
                            li { (property_card(p)) }
                        }
                    }
                }

                (pagination(params, result))
            }
        },
    )
}
