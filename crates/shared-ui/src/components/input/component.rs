use dioxus::prelude::*;

/// Text input. Pass `id` (and any other global attribute) through directly;
/// pair with a [`crate::Label`] for the caption.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
) -> Element {
    attributes.push(Attribute::new("class", "input", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            required: required,
            disabled: disabled,
            oninput: move |evt| on_input.call(evt),
            ..attributes,
        }
    }
}
