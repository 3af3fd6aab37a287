use cercis::prelude::*;

use crate::{
    feed::{ViewState, EMPTY_FEED_MESSAGE},
    listing::ListingSummary,
};

use crate::server::routes::{
    account::{PATH_LOGIN, PATH_REGISTER},
    listings::PATH_LISTINGS,
};

use super::HtmlError;

const SITE_NAME: &str = "떠나봄";
pub(crate) const FEED_HEADING: &str = "추천 숙소";

#[component]
fn Spinner() -> Element {
    rsx! {
        button {
            class: "button is-large is-white is-loading",
            "aria-label": "Loading",
        }
    }
}

#[component]
fn ListingCard<'a>(listing: &'a ListingSummary) -> Element {
    let image = listing.image_url();

    rsx! {
        div {
            class: "column is-one-third",

            div {
                class: "card",

                div {
                    class: "card-image",
                    figure {
                        class: "image",
                        img {
                            src: "{image}",
                            alt: "{listing.name}",
                        }
                    }
                }

                div {
                    class: "card-content",

                    p {
                        class: "title is-5",
                        "{listing.name}"
                    }

                    p {
                        strong { "위치:" }
                        " {listing.location}"
                    }
                }

                footer {
                    class: "card-footer",
                    p {
                        class: "card-footer-item has-text-grey",
                        "등록자: {listing.owner.email}"
                    }
                }
            }
        }
    }
}

#[component]
fn ListingFeedView<'a>(state: &'a ViewState) -> Element {
    match state {
        ViewState::Loading => rsx! {
            div {
                class: "has-text-centered mt-5",
                Spinner {}
            }
        },
        ViewState::Error(message) => rsx! {
            div {
                class: "notification is-danger mt-4",
                "{message}"
            }
        },
        ViewState::Loaded(listings) if listings.is_empty() => rsx! {
            p {
                "{EMPTY_FEED_MESSAGE}"
            }
        },
        ViewState::Loaded(listings) => rsx! {
            h2 {
                class: "title is-3 my-4",
                "{FEED_HEADING}"
            }

            div {
                class: "columns is-multiline",

                for listing in listings.iter() {
                    ListingCard {
                        listing: listing,
                    }
                }
            }
        },
    }
}

pub fn render_listing_feed(state: &ViewState) -> String {
    let output = rsx! {
        ListingFeedView {
            state: state,
        }
    };
    output.render()
}

#[component]
pub fn PageLayout<'a>(title: &'a str, children: Element<'a>) -> Element {
    rsx! {
        html {
            head {
                meta {
                    charset: "utf-8",
                }
                meta {
                    name: "viewport",
                    content: "width=device-width, initial-scale=1",
                }
                link {
                    rel: "stylesheet",
                    href: "https://cdn.jsdelivr.net/npm/bulma@1.0.1/css/bulma.min.css",
                }

                script {
                    src: "https://unpkg.com/htmx.org@2.0.1",
                    integrity: "sha384-QWGpdj554B4ETpJJC9z+ZHJcA/i59TyjxEPXiiUgN2WmTyV5OEZWCD6gQhgkdpB/",
                    crossorigin: "anonymous",
                }

                title {
                    "{title}"
                }
            }

            body {
                style: "display: flex; flex-direction: column; min-height: 100vh;",

                NavBar {}

                main {
                    class: "section",
                    style: "flex: 1;",
                    children
                }

                footer {
                    class: "footer has-background-dark has-text-white",
                    div {
                        class: "content has-text-centered",
                        p {
                            "© 2025 {SITE_NAME} (Tteonabom). All Rights Reserved."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav {
            class: "navbar is-light",
            role: "navigation",
            aria_label: "main navigation",

            div {
                class: "navbar-brand",

                a {
                    class: "navbar-item has-text-weight-bold",
                    href: "/",
                    "✈️ {SITE_NAME}"
                }
            }

            div {
                class: "navbar-menu",

                div {
                    class: "navbar-end",

                    a {
                        class: "navbar-item",
                        href: "{PATH_LOGIN}",
                        "로그인"
                    }

                    div {
                        class: "navbar-item",
                        a {
                            class: "button is-primary",
                            href: "{PATH_REGISTER}",
                            "회원가입"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Homepage<'a>(feed: &'a ViewState) -> Element {
    rsx! {
        div {
            class: "container",

            // Swapped for the settled feed once the page has loaded.
            div {
                id: "listing-feed",
                "hx-get": "{PATH_LISTINGS}",
                "hx-trigger": "load",
                "hx-swap": "innerHTML",

                ListingFeedView {
                    state: feed,
                }
            }
        }
    }
}

pub fn render_homepage() -> String {
    let feed = ViewState::Loading;

    let output = rsx! {
        PageLayout {
            title: "떠나봄 - 숙소 예약",
            Homepage {
                feed: &feed,
            }
        }
    };

    output.render()
}

#[component]
fn PlaceholderView<'a>(heading: &'a str) -> Element {
    rsx! {
        div {
            class: "container",
            div {
                class: "box has-text-centered",

                h2 {
                    class: "title is-4",
                    "{heading}"
                }
                p {
                    "아직 준비 중인 페이지입니다."
                }
            }
        }
    }
}

pub fn render_placeholder_page(heading: &str) -> String {
    let output = rsx! {
        PageLayout {
            title: heading,
            PlaceholderView {
                heading: heading,
            }
        }
    };
    output.render()
}

#[component]
fn HtmlErrorView<'a>(error: &'a HtmlError) -> Element {
    rsx! {
        p {
            class: "notification is-danger",

            "{error.message}"
        }
    }
}

pub(crate) fn render_html_error_page(error: &HtmlError) -> String {
    let output = rsx! {
        PageLayout {
            title: "Error",
            HtmlErrorView {
                error: error,
            }
        }
    };
    output.render()
}
