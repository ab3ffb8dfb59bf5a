use crate::domain::SearchCriteria;
use crate::handoff::Handoff;
use crate::results::ResultsView;
use crate::templates::components::{neighborhood_card, podium_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn results_page(handoff: &Handoff, handoff_id: &str) -> Markup {
    let view = ResultsView::from_result(&handoff.results);

    desktop_layout(
        "Results",
        html! {
            main class="results container" {
                @match view {
                    ResultsView::Empty => {
                        div class="no-results" {
                            div class="no-results-icon" { "🔍" }
                            h2 class="no-results-title" { "No neighborhoods found" }
                            p class="no-results-message" {
                                "Try adjusting your search criteria to find more options"
                            }
                            (new_search_button(handoff_id))
                        }
                    }
                    ResultsView::Ranked { podium, others } => {
                        div class="results-header" {
                            a class="back-button" href="/?search=open#search-form" { "← Back to Search" }
                            h1 class="title" { "Your Perfect " (handoff.criteria.city) " Neighborhoods" }
                            p class="subtitle" {
                                "Found " (handoff.results.total_results) " neighborhoods matching your criteria"
                            }
                        }

                        section class="podium-section" {
                            h2 class="podium-title" { "🏆 Top Picks" }
                            div class="podium" {
                                @for entry in &podium {
                                    (podium_card(entry))
                                }
                            }
                        }

                        @if !others.is_empty() {
                            section class="other-results" {
                                h2 class="other-results-title" { "Other Great Options" }
                                div class="neighborhood-grid" {
                                    @for entry in &others {
                                        (neighborhood_card(entry))
                                    }
                                }
                            }
                        }

                        (criteria_summary(&handoff.criteria))

                        div class="actions" {
                            (new_search_button(handoff_id))
                        }
                    }
                }
            }
        },
    )
}

fn criteria_summary(criteria: &SearchCriteria) -> Markup {
    html! {
        section class="search-summary" {
            h3 class="summary-title" { "Search Criteria" }
            div class="criteria-grid" {
                div class="criteria-item" {
                    span class="criteria-icon" { "💰" }
                    span class="criteria-label" { "Budget:" }
                    span class="criteria-value" { "$" (criteria.budget) "/month" }
                }
                @if let (Some(minutes), Some(destination)) =
                    (criteria.max_commute_time, criteria.destination_neighborhood.as_deref())
                {
                    div class="criteria-item" {
                        span class="criteria-icon" { "🚇" }
                        span class="criteria-label" { "Max Commute:" }
                        span class="criteria-value" { (minutes) " min to " (destination) }
                    }
                }
                @if !criteria.amenities.is_empty() {
                    div class="criteria-item" {
                        span class="criteria-icon" { "🎯" }
                        span class="criteria-label" { "Amenities:" }
                        span class="criteria-value" { (criteria.amenities.len()) " selected" }
                    }
                }
            }
        }
    }
}

/// Drops the stored handoff before reopening the form.
fn new_search_button(handoff_id: &str) -> Markup {
    html! {
        form method="post" action="/results/clear" class="new-search" {
            input type="hidden" name="handoff" value=(handoff_id);
            button type="submit" class="new-search-button" { "🔍 New Search" }
        }
    }
}
