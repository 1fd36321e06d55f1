//! Button Components
//!
//! - Primary: the predict action
//! - Icon: compact overlay actions such as removing the selected image

use dioxus::prelude::*;

use crate::components::Loader;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main call to action
    #[default]
    Primary,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
        }
    }
}

/// Join a base class with optional extras.
pub(crate) fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button label
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Swap the label for a spinner
    #[props(default = false)]
    pub loading: bool,
    /// Optional id attribute
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button with an optional loading state
///
/// While `loading` the label is hidden and a [`Loader`] takes its place.
/// The button does not disable itself; pass `disabled` explicitly.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         disabled: !widget.read().predict_enabled(),
///         loading: widget.read().is_loading(),
///         onclick: move |_| predict(),
///         "Classify Image"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            id: props.id.clone(),
            r#type: "button",
            disabled: props.disabled,
            "aria-busy": if props.loading { "true" } else { "false" },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.loading {
                Loader {}
            } else {
                span { class: "btn-text", {props.children} }
            }
        }
    }
}

/// Icon button for compact actions
///
/// Clicks never propagate, so an icon button can sit inside a clickable area.
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = class_list("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Remove button with X icon
#[component]
pub fn RemoveButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Remove image".to_string(),
            class: "remove-btn".to_string(),
            "\u{00D7}"
        }
    }
}
