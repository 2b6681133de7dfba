use maud::{html, Markup};

use crate::db::entities::{locations, Genres};
use crate::store::{EntitySummary, ShowSlot};

pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot message shown at the top of the page after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

pub fn flash_banner(flash: Option<&Flash>) -> Markup {
    let Some(flash) = flash else {
        return html! {};
    };
    let color = match flash.kind {
        FlashKind::Success => "bg-green-50 text-green-800 border-green-200",
        FlashKind::Error => "bg-red-50 text-red-800 border-red-200",
    };

    html! {
        div class={(format!("flash mb-6 p-4 border rounded-md {}", color))} role="alert" {
            (flash.message)
        }
    }
}

pub fn search_form(action: &str, placeholder: &str, term: &str) -> Markup {
    html! {
        form method="post" action=(action) class="flex gap-2 mb-6" {
            input
                type="search"
                name="search_term"
                value=(term)
                placeholder=(placeholder)
                class="flex-grow px-3 py-2 border border-gray-300 rounded-md";
            button type="submit" class="px-4 py-2 bg-indigo-600 text-white rounded-md" {
                "Search"
            }
        }
    }
}

/// Venue or artist line in a listing, linking to its detail page
pub fn entity_row(summary: &EntitySummary, base_path: &str) -> Markup {
    html! {
        li class="entity-row flex justify-between items-center px-4 py-3" {
            a href={(format!("{}/{}", base_path, summary.id))} class="font-medium text-gray-900 hover:underline" {
                (summary.name)
            }
            span class="text-sm text-gray-500" {
                (summary.num_upcoming_shows) " upcoming"
            }
        }
    }
}

pub fn entity_list(entities: &[EntitySummary], base_path: &str) -> Markup {
    html! {
        ul class="bg-white rounded-lg shadow-sm divide-y divide-gray-100" {
            @for summary in entities {
                (entity_row(summary, base_path))
            }
        }
    }
}

pub fn genre_tags(genres: &Genres) -> Markup {
    html! {
        @if !genres.is_empty() {
            div class="flex flex-wrap gap-2" {
                @for genre in genres.iter() {
                    span class="px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded" { (genre) }
                }
            }
        }
    }
}

pub fn location_label(location: Option<&locations::Model>) -> String {
    location
        .map(|l| format!("{}, {}", l.city, l.state))
        .unwrap_or_default()
}

pub fn detail_row(label: &str, value: Option<&str>) -> Markup {
    html! {
        @if let Some(value) = value {
            div {
                dt class="text-sm font-medium text-gray-500" { (label) }
                dd class="mt-1 text-gray-900" { (value) }
            }
        }
    }
}

/// A titled list of shows; `counterpart_path` is where each entry links
pub fn show_slot_list(title: &str, slots: &[ShowSlot], counterpart_path: &str) -> Markup {
    html! {
        section class="mt-8" {
            h3 class="text-lg font-semibold text-gray-900 mb-3" {
                (slots.len()) " " (title)
            }
            @if slots.is_empty() {
                p class="text-gray-500" { "Nothing scheduled." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                    @for slot in slots {
                        a href={(format!("{}/{}", counterpart_path, slot.counterpart_id))}
                          class="flex items-center gap-3 bg-white rounded-lg shadow-sm p-3" {
                            img
                                src=(slot.counterpart_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                                alt=(slot.counterpart_name)
                                class="w-16 h-16 object-cover rounded"
                                loading="lazy";
                            div {
                                p class="font-medium text-gray-900" { (slot.counterpart_name) }
                                p class="text-sm text-gray-500" { (slot.start_time) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn cover_image(link: Option<&str>, alt: &str) -> Markup {
    html! {
        img
            src=(link.unwrap_or(PLACEHOLDER_IMAGE))
            alt=(alt)
            class="w-full md:w-64 rounded-lg shadow-md";
    }
}

pub fn text_field(label: &str, name: &str, value: Option<&str>, required: bool) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-1" { (label) }
            input
                type="text"
                id=(name)
                name=(name)
                value=(value.unwrap_or(""))
                required[required]
                class="w-full px-3 py-2 border border-gray-300 rounded-md";
        }
    }
}

pub fn genres_field(selected: &[String]) -> Markup {
    html! {
        div {
            label for="genres" class="block text-sm font-medium text-gray-700 mb-1" { "Genres" }
            select id="genres" name="genres" multiple class="w-full px-3 py-2 border border-gray-300 rounded-md h-40" {
                @for genre in GENRE_CHOICES {
                    option value=(genre) selected[selected.iter().any(|s| s == genre)] { (genre) }
                }
            }
        }
    }
}

pub fn submit_button(label: &str) -> Markup {
    html! {
        button type="submit" class="px-4 py-2 bg-indigo-600 text-white rounded-md" { (label) }
    }
}

/// Delete button posting to `action`
pub fn delete_button(action: &str, label: &str) -> Markup {
    html! {
        form method="post" action=(action) onsubmit="return confirm('Are you sure?')" {
            button type="submit" class="px-3 py-2 bg-red-600 text-white text-sm rounded-md" { (label) }
        }
    }
}
