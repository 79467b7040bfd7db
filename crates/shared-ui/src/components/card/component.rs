use dioxus::prelude::*;

/// Surface container for a single focused task (auth forms, confirmations).
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "card", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..attributes,
            {children}
        }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "card-header", None, false));

    rsx! {
        div {
            ..attributes,
            {children}
        }
    }
}

/// Title element within a CardHeader.
#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "card-title", None, false));

    rsx! {
        h2 {
            ..attributes,
            {children}
        }
    }
}

/// Supporting text under the title.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "card-description", None, false));

    rsx! {
        p {
            ..attributes,
            {children}
        }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "card-content", None, false));

    rsx! {
        div {
            ..attributes,
            {children}
        }
    }
}

/// Footer section of a Card.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "card-footer", None, false));

    rsx! {
        div {
            ..attributes,
            {children}
        }
    }
}
