use axum::http::StatusCode;
use maud::{html, Markup};

use super::components::{
    cover_image, delete_button, detail_row, entity_list, flash_banner, genre_tags,
    genres_field, location_label, search_form, show_slot_list, submit_button, text_field, Flash,
};
use super::layout::base_layout;
use crate::store::{
    ArtistDetail, ArtistFields, EntitySummary, SearchResults, ShowListing, VenueArea,
    VenueDetail, VenueFields,
};

pub fn home_page(flash: Option<&Flash>) -> Markup {
    base_layout(
        "Home",
        html! {
            (flash_banner(flash))

            div class="text-center py-12" {
                h1 class="text-3xl font-bold text-gray-900 mb-4" { "Find a stage. Fill a stage." }
                p class="text-gray-600 mb-8" {
                    "List your venue or your act, then book shows between them."
                }
                div class="flex justify-center gap-4" {
                    a href="/venues/create" class="px-4 py-2 bg-indigo-600 text-white rounded-md" { "Post a venue" }
                    a href="/artists/create" class="px-4 py-2 bg-indigo-600 text-white rounded-md" { "Post an artist" }
                    a href="/shows/create" class="px-4 py-2 bg-indigo-600 text-white rounded-md" { "Post a show" }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[VenueArea]) -> Markup {
    base_layout(
        "Venues",
        html! {
            (search_form("/venues/search", "Find a venue", ""))

            @if areas.is_empty() {
                p class="text-gray-600 text-lg text-center py-12" { "No venues listed yet." }
            }
            @for area in areas {
                section class="mb-8" {
                    h2 class="text-xl font-semibold text-gray-900 mb-2" {
                        @if area.location.is_some() {
                            (area.city()) ", " (area.state())
                        } @else {
                            "Unknown location"
                        }
                    }
                    (entity_list(&area.venues, "/venues"))
                }
            }
        },
    )
}

pub fn artists_page(artists: &[EntitySummary]) -> Markup {
    base_layout(
        "Artists",
        html! {
            (search_form("/artists/search", "Find an artist", ""))

            @if artists.is_empty() {
                p class="text-gray-600 text-lg text-center py-12" { "No artists listed yet." }
            } @else {
                (entity_list(artists, "/artists"))
            }
        },
    )
}

/// Shared by venue and artist search; `base_path` is `/venues` or `/artists`
pub fn search_results_page(base_path: &str, term: &str, results: &SearchResults) -> Markup {
    base_layout(
        "Search",
        html! {
            (search_form(&format!("{}/search", base_path), "Search again", term))

            h2 class="text-xl font-semibold text-gray-900 mb-4" {
                "Number of search results for \"" (term) "\": " (results.count)
            }
            @if !results.data.is_empty() {
                (entity_list(&results.data, base_path))
            }
        },
    )
}

pub fn venue_detail_page(detail: &VenueDetail) -> Markup {
    let venue = &detail.venue;

    base_layout(
        &venue.name,
        html! {
            div class="flex flex-col md:flex-row gap-6" {
                div class="flex-shrink-0" {
                    (cover_image(venue.image_link.as_deref(), &venue.name))
                }
                div class="flex-grow" {
                    div class="flex justify-between items-start" {
                        h1 class="text-3xl font-bold text-gray-900" { (venue.name) }
                        div class="flex gap-2" {
                            a href={(format!("/venues/{}/edit", venue.id))} class="px-3 py-2 bg-gray-200 text-sm rounded-md" { "Edit" }
                            (delete_button(&format!("/venues/{}/delete", venue.id), "Delete"))
                        }
                    }
                    p class="text-sm text-gray-500 mb-4" { "ID: " (venue.id) }
                    (genre_tags(&venue.genres))
                    dl class="space-y-4 mt-4" {
                        (detail_row("Location", Some(location_label(detail.location.as_ref()).as_str())))
                        (detail_row("Address", venue.address.as_deref()))
                        (detail_row("Phone", venue.phone.as_deref()))
                        (detail_row("Website", venue.website.as_deref()))
                        (detail_row("Facebook", venue.facebook_link.as_deref()))
                        (detail_row("Seeking talent", venue.seeking_talent.as_deref()))
                        (detail_row("About", venue.seeking_description.as_deref()))
                    }
                }
            }

            (show_slot_list("Upcoming Shows", &detail.shows.upcoming, "/artists"))
            (show_slot_list("Past Shows", &detail.shows.past, "/artists"))
        },
    )
}

pub fn artist_detail_page(detail: &ArtistDetail) -> Markup {
    let artist = &detail.artist;

    base_layout(
        &artist.name,
        html! {
            div class="flex flex-col md:flex-row gap-6" {
                div class="flex-shrink-0" {
                    (cover_image(artist.image_link.as_deref(), &artist.name))
                }
                div class="flex-grow" {
                    div class="flex justify-between items-start" {
                        h1 class="text-3xl font-bold text-gray-900" { (artist.name) }
                        div class="flex gap-2" {
                            a href={(format!("/artists/{}/edit", artist.id))} class="px-3 py-2 bg-gray-200 text-sm rounded-md" { "Edit" }
                            (delete_button(&format!("/artists/{}/delete", artist.id), "Delete"))
                        }
                    }
                    p class="text-sm text-gray-500 mb-4" { "ID: " (artist.id) }
                    (genre_tags(&artist.genres))
                    dl class="space-y-4 mt-4" {
                        (detail_row("Location", Some(location_label(detail.location.as_ref()).as_str())))
                        (detail_row("Phone", artist.phone.as_deref()))
                        (detail_row("Website", artist.website.as_deref()))
                        (detail_row("Facebook", artist.facebook_link.as_deref()))
                        (detail_row("Seeking venues", artist.seeking_venue.as_deref()))
                        (detail_row("About", artist.seeking_description.as_deref()))
                    }
                }
            }

            (show_slot_list("Upcoming Shows", &detail.shows.upcoming, "/venues"))
            (show_slot_list("Past Shows", &detail.shows.past, "/venues"))
        },
    )
}

pub fn shows_page(shows: &[ShowListing]) -> Markup {
    base_layout(
        "Shows",
        html! {
            @if shows.is_empty() {
                p class="text-gray-600 text-lg text-center py-12" { "No shows booked yet." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                    @for show in shows {
                        div class="bg-white rounded-lg shadow-sm p-4" {
                            p class="text-sm text-gray-500" { (show.start_time) }
                            a href={(format!("/artists/{}", show.artist_id))} class="block font-semibold text-gray-900 hover:underline" {
                                (show.artist_name)
                            }
                            "playing at "
                            a href={(format!("/venues/{}", show.venue_id))} class="text-indigo-600 hover:underline" {
                                (show.venue_name)
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_form_page(
    heading: &str,
    action: &str,
    fields: &VenueFields,
    city: &str,
    state: &str,
    flash: Option<&Flash>,
) -> Markup {
    base_layout(
        heading,
        html! {
            (flash_banner(flash))
            h1 class="text-2xl font-bold text-gray-900 mb-6" { (heading) }
            form method="post" action=(action) class="space-y-4 max-w-xl" {
                (text_field("Name", "name", Some(fields.name.as_str()), true))
                (text_field("City", "city", Some(city), true))
                (text_field("State", "state", Some(state), true))
                (text_field("Address", "address", fields.address.as_deref(), false))
                (text_field("Phone", "phone", fields.phone.as_deref(), false))
                (genres_field(&fields.genres))
                (text_field("Website", "website", fields.website.as_deref(), false))
                (text_field("Facebook link", "facebook_link", fields.facebook_link.as_deref(), false))
                (text_field("Image link", "image_link", fields.image_link.as_deref(), false))
                (text_field("Seeking talent", "seeking_talent", fields.seeking_talent.as_deref(), false))
                (text_field("Seeking description", "seeking_description", fields.seeking_description.as_deref(), false))
                (submit_button("Save venue"))
            }
        },
    )
}

pub fn artist_form_page(
    heading: &str,
    action: &str,
    fields: &ArtistFields,
    city: &str,
    state: &str,
    flash: Option<&Flash>,
) -> Markup {
    base_layout(
        heading,
        html! {
            (flash_banner(flash))
            h1 class="text-2xl font-bold text-gray-900 mb-6" { (heading) }
            form method="post" action=(action) class="space-y-4 max-w-xl" {
                (text_field("Name", "name", Some(fields.name.as_str()), true))
                (text_field("City", "city", Some(city), true))
                (text_field("State", "state", Some(state), true))
                (text_field("Phone", "phone", fields.phone.as_deref(), false))
                (genres_field(&fields.genres))
                (text_field("Website", "website", fields.website.as_deref(), false))
                (text_field("Facebook link", "facebook_link", fields.facebook_link.as_deref(), false))
                (text_field("Image link", "image_link", fields.image_link.as_deref(), false))
                (text_field("Seeking venue", "seeking_venue", fields.seeking_venue.as_deref(), false))
                (text_field("Seeking description", "seeking_description", fields.seeking_description.as_deref(), false))
                (submit_button("Save artist"))
            }
        },
    )
}

pub fn show_form_page(flash: Option<&Flash>) -> Markup {
    base_layout(
        "New show",
        html! {
            (flash_banner(flash))
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "List a new show" }
            form method="post" action="/shows/create" class="space-y-4 max-w-xl" {
                (text_field("Artist ID", "artist_id", None, true))
                (text_field("Venue ID", "venue_id", None, true))
                div {
                    label for="start_time" class="block text-sm font-medium text-gray-700 mb-1" { "Start date" }
                    input type="date" id="start_time" name="start_time" required
                        class="w-full px-3 py-2 border border-gray-300 rounded-md";
                }
                (submit_button("Create show"))
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    base_layout(
        status.canonical_reason().unwrap_or("Error"),
        html! {
            div class="text-center py-12" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { (status.as_u16()) }
                p class="text-gray-600 text-lg" { (message) }
                a href="/" class="inline-block mt-6 text-indigo-600 hover:underline" { "Back home" }
            }
        },
    )
}
