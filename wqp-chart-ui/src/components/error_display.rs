//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Banner over the map for failures the user cannot retry from the popup.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "position: absolute; top: 12px; left: 50%; transform: translateX(-50%); z-index: 1000; padding: 10px 16px; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
