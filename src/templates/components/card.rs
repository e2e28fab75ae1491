use crate::domain::Property;
use crate::templates::components::format::{number, usd};
use maud::{html, Markup};

/// Result card. Optional values that are missing are simply not shown.
pub fn property_card(p: &Property) -> Markup {
    let addr = p.display_address();

    html! {
        article class="card property-card" data-id=(p.id) {
            div class="card-media" {
                div class="card-media-empty" { "No image" }
            }
            div class="card-body" {
                @if let Some(price) = p.price {
                    p class="price" { (usd(price)) }
                }
                @if let Some(rent) = p.rent_estimate {
                    p class="rent" { "Est. rent " (usd(rent)) "/mo" }
                }
                p class="address" { (addr) }
                div class="facts" {
                    @if let Some(beds) = p.bedrooms {
                        span { (beds) " bed" }
                    }
                    @if let Some(baths) = p.bathrooms {
                        span { (baths) " bath" }
                    }
                    @if let Some(sqft) = p.square_footage {
                        span { (number(sqft)) " sq ft" }
                    }
                    @if let Some(kind) = &p.property_type {
                        span { (kind) }
                    }
                }
            }
        }
    }
}
