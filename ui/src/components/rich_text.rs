use api::i18n::Message;
use api::i18n::Span;
use dioxus::prelude::*;

fn render_spans(spans: &[Span]) -> Element {
    rsx! {
        for span in spans {
            {render_span(span)}
        }
    }
}

fn render_span(span: &Span) -> Element {
    match span {
        Span::Text(text) => rsx! { "{text}" },
        Span::Strong(children) => rsx! {
            strong { {render_spans(children)} }
        },
        Span::Emphasis(children) => rsx! {
            em { {render_spans(children)} }
        },
        Span::Code(children) => rsx! {
            code { {render_spans(children)} }
        },
        Span::Link { href, children } => rsx! {
            a { href: "{href}", {render_spans(children)} }
        },
        Span::LineBreak => rsx! { br {} },
    }
}

/// Renders a translated message, keeping its inline formatting.
#[component]
pub fn RichText(message: Message) -> Element {
    match message {
        Message::Plain(text) => rsx! { "{text}" },
        Message::Rich(spans) => render_spans(&spans),
    }
}
