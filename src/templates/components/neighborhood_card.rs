use crate::results::{format_score, top_amenities, RankedEntry, ScoreTier, LIST_AMENITIES};
use crate::templates::styles;
use maud::{html, Markup};

/// Card for ranks 4 and below.
pub fn neighborhood_card(entry: &RankedEntry) -> Markup {
    let hood = entry.neighborhood;
    let tier = styles::tier(ScoreTier::from_score(hood.score));

    html! {
        article class="neighborhood-card" data-rank=(entry.rank) {
            div class="card-header" {
                div class="rank-badge" { span class="rank-text" { "#" (entry.rank) } }
                div class={ "score-circle " (tier.class) } style=(format!("--score-color: {}", tier.color)) {
                    span class="score-value" { (format_score(hood.score)) }
                    span class="score-percent" { "%" }
                }
            }

            div class="card-content" {
                h3 class="neighborhood-name" { (hood.name) }

                @if let Some(minutes) = hood.commute_time.filter(|m| *m > 0) {
                    div class="commute-info" {
                        span class="commute-icon" { "🚇" }
                        span class="commute-text" { (minutes) " min commute" }
                    }
                }

                div class="amenities-grid" {
                    @for (amenity, count) in top_amenities(&hood.amenity_counts, LIST_AMENITIES) {
                        div class="amenity-item" {
                            span class="amenity-icon" { (styles::amenity(amenity).icon) }
                            div class="amenity-details" {
                                span class="amenity-count" { (count) }
                                span class="amenity-type" { (amenity.code()) }
                            }
                        }
                    }
                }

                div class="total-section" {
                    span class="total-icon" { "📍" }
                    span class="total-text" { (hood.total_amenities) " total amenities" }
                }
            }
        }
    }
}
