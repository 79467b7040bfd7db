use dioxus::prelude::*;

/// Form field caption tied to an input by its `html_for` id.
#[component]
pub fn Label(
    #[props(default)] html_for: String,
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            r#for: "{html_for}",
            ..attributes,
            {children}
        }
    }
}
