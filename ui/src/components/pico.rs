//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// Pico renders any element with `aria-busy="true"` as a spinner.
#[component]
pub fn Spinner() -> Element {
    rsx! { span { "aria-busy": "true" } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Shows the Pico spinner inside the button.
    #[props(default = false)]
    busy: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Primary, true) => "outline",
        (ButtonType::Secondary, false) => "secondary",
        (ButtonType::Secondary, true) => "secondary outline",
        (ButtonType::Contrast, false) => "contrast",
        (ButtonType::Contrast, true) => "contrast outline",
    };
    rsx! {
        button {
            class: "{class_str}",
            r#type: "button",
            disabled: props.disabled || props.busy,
            "aria-busy": if props.busy { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    name: String,
    value: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = false)]
    required: bool,
    /// `Some(true)` marks the field red, `Some(false)` green, `None` neutral.
    #[props(optional)]
    invalid: Option<bool>,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
}

/// A controlled form input field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        input {
            r#type: "{props.input_type}",
            name: "{props.name}",
            value: "{props.value}",
            placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
            required: props.required,
            "aria-invalid": match props.invalid {
                Some(true) => "true",
                Some(false) => "false",
                None => "",
            },
            oninput: move |evt| {
                if let Some(handler) = &props.on_input {
                    handler.call(evt);
                }
            },
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
}

/// A titled dialog that closes on its close link, backdrop click or Escape.
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;
    rsx! {
        if props.open {
            dialog {
                open: true,
                autofocus: true,
                onclick: move |_| on_close.call(()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        on_close.call(());
                    }
                },
                // The <article> tag holds the content and stops the click
                // from propagating to the backdrop and closing the modal.
                article {
                    onclick: |evt| evt.stop_propagation(),
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |evt| {
                                evt.prevent_default();
                                on_close.call(());
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
