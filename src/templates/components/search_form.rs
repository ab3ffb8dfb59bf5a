use crate::form::{FormField, FormOptions, SearchForm, ValidationErrors};
use crate::templates::styles;
use maud::{html, Markup};

/// Everything the search modal needs to render, including the previous
/// attempt when a submit bounced.
pub struct SearchFormVm<'a> {
    pub form: &'a SearchForm,
    pub options: &'a FormOptions,
    pub errors: &'a ValidationErrors,
    /// Banner shown above the form, e.g. when the backend is down.
    pub notice: Option<&'a str>,
}

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "form-input error-input"
    } else {
        "form-input"
    }
}

fn field_error(errors: &ValidationErrors, field: FormField) -> Markup {
    html! {
        @if errors.contains(field) {
            p class="field-error" id=(format!("{}-error", field.input_name())) { (field.message()) }
        }
    }
}

pub fn search_form(vm: &SearchFormVm) -> Markup {
    let form = vm.form;
    let errors = vm.errors;

    html! {
        div class="modal-overlay" id="search-form" {
            div class="modal-container" {
                div class="modal-header" {
                    h2 class="modal-title" { "Find Your Perfect " (form.city()) " Neighborhood" }
                    a class="close-button" href="/" aria-label="Close" { "×" }
                }

                @if let Some(notice) = vm.notice {
                    div class="form-notice" role="alert" { (notice) }
                }

                form class="search-form" method="post" action="/search" novalidate {
                    section class="form-section" {
                        h3 class="section-title" { "📍 Basic Details" }
                        div class="form-grid" {
                            div class="form-group" {
                                label class="form-label" for="budget" {
                                    "Budget (Monthly) " span class="required" { "*" }
                                }
                                div class="input-wrapper" {
                                    span class="input-prefix" { "$" }
                                    input
                                        type="number"
                                        id="budget"
                                        name="budget"
                                        min="0"
                                        class=(input_class(errors.contains(FormField::Budget)))
                                        value=(form.budget());
                                }
                                (field_error(errors, FormField::Budget))
                            }

                            div class="form-group" {
                                label class="form-label" for="max_commute_time" {
                                    "Max Commute Time "
                                    @if errors.contains(FormField::MaxCommuteTime) {
                                        span class="required" { "*" }
                                    }
                                }
                                div class="input-wrapper" {
                                    input
                                        type="number"
                                        id="max_commute_time"
                                        name="max_commute_time"
                                        min="0"
                                        class=(input_class(errors.contains(FormField::MaxCommuteTime)))
                                        value=(form.max_commute_time());
                                    span class="input-suffix" { "min" }
                                }
                                (field_error(errors, FormField::MaxCommuteTime))
                            }
                        }

                        select
                            name="destination_neighborhood"
                            aria-label="Commute destination"
                            class={ (input_class(errors.contains(FormField::DestinationNeighborhood))) " full-width" }
                        {
                            option value="" selected[form.destination().is_empty()] { "Select destination" }
                            @for name in &vm.options.neighborhoods {
                                option value=(name) selected[form.destination() == name.as_str()] { (name) }
                            }
                        }
                        (field_error(errors, FormField::DestinationNeighborhood))
                    }

                    section class="form-section" {
                        h3 class="section-title" { "🏘️ Preferred Neighborhoods" }
                        p class="section-description" {
                            "Select neighborhoods you'd like to prioritize (optional)"
                        }
                        div class="neighborhood-grid" {
                            @if vm.options.neighborhoods.is_empty() {
                                p class="empty-hint" { "No neighborhoods available right now." }
                            }
                            @for name in &vm.options.neighborhoods {
                                label class="neighborhood-card" {
                                    input
                                        type="checkbox"
                                        name="preferred_neighborhoods"
                                        value=(name)
                                        checked[form.prefers(name)];
                                    span class="neighborhood-name" { (name) }
                                    span class="neighborhood-check" { "✓" }
                                }
                            }
                        }
                    }

                    section class="form-section" {
                        h3 class="section-title" { "🎯 What's Important to You?" }
                        div class="card-grid" {
                            @for amenity in &vm.options.amenities {
                                @let style = styles::amenity(*amenity);
                                label class="option-card" style=(styles::card_color(&style)) {
                                    input
                                        type="checkbox"
                                        name="amenities"
                                        value=(amenity.code())
                                        checked[form.has_amenity(*amenity)];
                                    span class="card-icon" { (style.icon) }
                                    span class="card-name" { (style.label) }
                                    span class="card-check" { "✓" }
                                }
                            }
                        }
                    }

                    section class="form-section" {
                        h3 class="section-title" { "🏠 What Size Place?" }
                        div class="card-grid" {
                            @for rent in &vm.options.rent_types {
                                @let style = styles::rent_type(*rent);
                                label class="option-card" style=(styles::card_color(&style)) {
                                    input
                                        type="checkbox"
                                        name="rent_types"
                                        value=(rent.code())
                                        checked[form.has_rent_type(*rent)];
                                    span class="card-icon" { (style.icon) }
                                    span class="card-name" { (style.label) }
                                    span class="card-check" { "✓" }
                                }
                            }
                        }
                    }

                    div class="form-actions" {
                        a class="cancel-button" href="/" { "Cancel" }
                        button type="submit" class="submit-button" {
                            span class="button-icon" { "🔍" }
                            "Find My Neighborhood"
                            span class="button-sparkle" { "✨" }
                        }
                    }
                }
            }
        }
    }
}
