use dioxus::prelude::*;

/// Visual tone for alerts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Default => "default",
            AlertVariant::Destructive => "destructive",
        }
    }
}

/// Inline callout banner, e.g. for errors handed back through a query
/// parameter.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "alert", None, false));
    attributes.push(Attribute::new("data-style", variant.class(), None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "alert",
            ..attributes,
            {children}
        }
    }
}

/// Body text inside an [`Alert`].
#[component]
pub fn AlertDescription(
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "alert-description", None, false));

    rsx! {
        p {
            ..attributes,
            {children}
        }
    }
}
