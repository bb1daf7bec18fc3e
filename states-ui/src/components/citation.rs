//! Superscript `[n]` citation linking to a source.

use dioxus::prelude::*;
use states_core::CitationKey;

#[derive(Props, Clone, PartialEq)]
pub struct CiteProps {
    pub source: CitationKey,
}

#[component]
pub fn Cite(props: CiteProps) -> Element {
    let citation = props.source.citation();
    rsx! {
        sup {
            class: "cite",
            a {
                href: citation.url,
                target: "_blank",
                rel: "noopener",
                title: citation.label,
                "[{citation.id}]"
            }
        }
    }
}
