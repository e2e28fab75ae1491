use maud::{html, Markup};

pub const API_KEY_VAR: &str = "RENTCAST_API_KEY";

/// Shown whenever results come from the bundled sample listings.
pub fn demo_banner() -> Markup {
    html! {
        div class="demo-banner" role="note" {
            strong { "Demo mode." }
            " Showing sample listings. Add "
            code { (API_KEY_VAR) }
            " to the environment for live data (50 free calls/month at "
            a href="https://rentcast.io" target="_blank" rel="noreferrer" { "rentcast.io" }
            ")."
        }
    }
}
