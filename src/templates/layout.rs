use maud::{html, Markup, DOCTYPE};

const SITE_NAME: &str = "Venue Directory";

/// Top-level sections, in nav order
const SECTIONS: &[(&str, &str)] = &[
    ("/venues", "Venues"),
    ("/artists", "Artists"),
    ("/shows", "Shows"),
];

pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                script src="https://cdn.tailwindcss.com" {}
                style { ".entity-row:hover { background-color: #f9fafb; }" }
            }
            body class="min-h-screen bg-gray-50 flex flex-col" {
                (site_header())
                main class="container mx-auto px-4 py-8 flex-grow" {
                    (content)
                }
                footer class="border-t border-gray-200 py-6 text-center text-sm text-gray-500" {
                    "Book local talent at local venues."
                }
            }
        }
    }
}

fn site_header() -> Markup {
    html! {
        header class="bg-white shadow-sm" {
            nav class="container mx-auto px-4 h-16 flex items-center justify-between" {
                a href="/" class="text-xl font-bold text-gray-900" { (SITE_NAME) }
                ul class="flex gap-2" {
                    @for (href, label) in SECTIONS {
                        li {
                            a href=(href) class="px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:text-indigo-600" {
                                (label)
                            }
                        }
                    }
                }
            }
        }
    }
}
