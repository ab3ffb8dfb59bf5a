use crate::results::{format_score, top_amenities, PodiumEntry, ScoreTier, PODIUM_AMENITIES};
use crate::templates::styles;
use maud::{html, Markup};

pub fn podium_card(entry: &PodiumEntry) -> Markup {
    let hood = entry.neighborhood;
    let place = styles::podium(entry.position);
    let tier = styles::tier(ScoreTier::from_score(hood.score));
    let rank = entry.position.rank();

    html! {
        article class=(place.class) data-rank=(rank) {
            div class="medal" {
                span class="medal-emoji" { (place.medal) }
                span class="rank-number" { (rank) }
            }

            div class="card-content" {
                h3 class="neighborhood-name" { (hood.name) }

                div class={ "score " (tier.class) } {
                    span class="score-label" { "Match Score" }
                    span class="score-value" { (format_score(hood.score)) "%" }
                }

                @if let Some(minutes) = hood.commute_time.filter(|m| *m > 0) {
                    div class="commute-time" {
                        span class="commute-icon" { "🚇" }
                        span { (minutes) " min commute" }
                    }
                }

                @if !hood.amenity_counts.is_empty() {
                    div class="amenities-section" {
                        h4 class="amenities-title" { "Top Amenities" }
                        ul class="amenities-list" {
                            @for (amenity, count) in top_amenities(&hood.amenity_counts, PODIUM_AMENITIES) {
                                li class="amenity-item" {
                                    span class="amenity-icon" { (styles::amenity(amenity).icon) }
                                    span class="amenity-text" { (count) " " (amenity.code()) }
                                }
                            }
                        }
                    }
                }

                div class="total-amenities" {
                    span class="total-icon" { "📍" }
                    span class="total-text" { (hood.total_amenities) " total amenities" }
                }
            }

            div class="podium-base" {
                span class="position-label" { "#" (rank) }
            }
        }
    }
}
