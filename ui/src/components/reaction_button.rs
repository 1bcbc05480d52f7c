use api::wishlist::ReactionPicker;
use api::wishlist::ALL_REACTIONS;
use dioxus::prelude::*;

/// Heart button that swaps itself for the emoji the viewer picks.
#[component]
pub fn ReactionButton() -> Element {
    let mut picker = use_signal(ReactionPicker::default);
    let marker = picker.read().chosen.map(|r| r.emoji()).unwrap_or("♡");

    rsx! {
        div {
            style: "position: relative;",
            button {
                class: "secondary outline",
                r#type: "button",
                style: "padding: 0.25rem 0.6rem; margin: 0;",
                "aria-label": "React",
                onclick: move |_| picker.write().toggle(),
                "{marker}"
            }
            if picker.read().open {
                div {
                    class: "reaction-menu",
                    for reaction in ALL_REACTIONS {
                        button {
                            key: "{reaction.emoji()}",
                            r#type: "button",
                            class: "secondary outline",
                            onclick: move |_| picker.write().choose(reaction),
                            "{reaction.emoji()}"
                        }
                    }
                }
            }
        }
    }
}
