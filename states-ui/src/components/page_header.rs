//! Site header with the page title and navigation between pages.

use dioxus::prelude::*;

/// The four pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Explore,
    Data,
    Facts,
    Sources,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Explore, Page::Data, Page::Facts, Page::Sources];

    pub fn href(self) -> &'static str {
        match self {
            Page::Explore => "index.html",
            Page::Data => "data.html",
            Page::Facts => "facts.html",
            Page::Sources => "sources.html",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Explore => "Map",
            Page::Data => "Data",
            Page::Facts => "Fun Facts",
            Page::Sources => "Sources",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Page currently shown
    pub current: Page,
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        header {
            class: "site-header",
            style: "margin-bottom: 12px;",
            nav {
                class: "site-nav",
                style: "display: flex; gap: 16px; font-size: 14px; margin-bottom: 8px;",
                for page in Page::ALL {
                    a {
                        key: "{page.href()}",
                        href: page.href(),
                        class: if page == props.current { "nav-link active" } else { "nav-link" },
                        "{page.label()}"
                    }
                }
            }
            h1 {
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
