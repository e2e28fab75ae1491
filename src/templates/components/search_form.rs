use crate::domain::SearchParams;
use maud::{html, Markup};

/// GET form back to `/`, pre-filled with the active filters.
pub fn search_form(params: &SearchParams) -> Markup {
    let city = params.city.as_deref().unwrap_or("");
    let state = params.state.as_deref().unwrap_or("");
    let zip_code = params.zip_code.as_deref().unwrap_or("");

    html! {
        section class="search-bar" {
            div class="container" {
                form method="get" action="/" class="search-form" {
                    div class="field grow" {
                        label for="city" { "City" }
                        input id="city" name="city" type="text" placeholder="e.g. San Francisco" value=(city);
                    }
                    div class="field narrow" {
                        label for="state" { "State" }
                        input id="state" name="state" type="text" placeholder="CA" maxlength="2" class="uppercase" value=(state);
                    }
                    div class="field narrow" {
                        label for="zipCode" { "ZIP" }
                        input id="zipCode" name="zipCode" type="text" placeholder="94102" value=(zip_code);
                    }
                    button type="submit" class="primary" { "Search" }
                }
            }
        }
    }
}
