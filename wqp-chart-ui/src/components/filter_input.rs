//! Pollutant / matrix input with its dropdown menu.

use crate::render::WebController;
use crate::state::{AppState, OpenMenu};
use dioxus::prelude::*;
use wqp_core::{Axis, MenuEntries, NO_RESULTS_TEXT};

/// Ask the controller for the menu of `axis` filtered by `query`.
///
/// Answers to an older keystroke than `generation` are dropped.
fn request_menu(
    controller: WebController,
    axis: Axis,
    query: String,
    mut generation: Signal<u64>,
    mut menu: Signal<Option<OpenMenu>>,
) {
    let current = generation() + 1;
    generation.set(current);
    spawn(async move {
        let entries = controller.menu_options(axis, &query).await;
        if generation() != current {
            return;
        }
        menu.set(entries.map(|entries| OpenMenu { axis, entries }));
    });
}

fn apply_choice(controller: WebController, axis: Axis, value: String) {
    spawn(async move {
        match axis {
            Axis::Pollutant => controller.apply_filter(Some(value), None).await,
            Axis::Matrix => controller.apply_filter(None, Some(value)).await,
        }
    });
}

#[component]
pub fn FilterInput(axis: Axis, label: String) -> Element {
    let state = use_context::<AppState>();
    let controller = use_context::<WebController>();
    let mut text = state.input(axis);
    let mut menu = state.menu;
    let generation = use_signal(|| 0u64);

    let entries = match &*menu.read() {
        Some(open) if open.axis == axis => Some(open.entries.clone()),
        _ => None,
    };
    let input_id = format!("wqp-{}-input", axis);

    let on_focus = {
        let controller = controller.clone();
        move |_: Event<FocusData>| request_menu(controller.clone(), axis, text(), generation, menu)
    };
    let on_input = {
        let controller = controller.clone();
        move |evt: Event<FormData>| {
            let value = evt.value();
            text.set(value.clone());
            request_menu(controller.clone(), axis, value, generation, menu);
        }
    };

    rsx! {
        div {
            style: "position: relative; flex: 1;",
            label {
                r#for: "{input_id}",
                style: "display: block; font-size: 12px; font-weight: bold; margin-bottom: 2px;",
                "{label}"
            }
            input {
                id: "{input_id}",
                r#type: "text",
                autocomplete: "off",
                style: "width: 100%; box-sizing: border-box; padding: 4px 6px;",
                value: "{text}",
                onfocus: on_focus,
                oninput: on_input,
            }
            match entries {
                Some(MenuEntries::Items(items)) => rsx! {
                    ul {
                        style: "position: absolute; z-index: 1100; left: 0; right: 0; max-height: 180px; overflow-y: auto; margin: 0; padding: 0; list-style: none; background: white; border: 1px solid #ccc;",
                        for item in items {
                            li {
                                key: "{item}",
                                style: "padding: 4px 6px; cursor: pointer;",
                                onclick: {
                                    let controller = controller.clone();
                                    let item = item.clone();
                                    move |_: MouseEvent| {
                                        menu.set(None);
                                        text.set(item.clone());
                                        apply_choice(controller.clone(), axis, item.clone());
                                    }
                                },
                                "{item}"
                            }
                        }
                    }
                },
                Some(MenuEntries::NoResults) => rsx! {
                    ul {
                        style: "position: absolute; z-index: 1100; left: 0; right: 0; margin: 0; padding: 0; list-style: none; background: white; border: 1px solid #ccc;",
                        li {
                            "aria-disabled": "true",
                            style: "padding: 4px 6px; color: #999; cursor: default;",
                            "{NO_RESULTS_TEXT}"
                        }
                    }
                },
                None => rsx! {},
            }
        }
    }
}
