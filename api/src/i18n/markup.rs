//! Inline markup carried inside translated strings.

use dioxus_logger::tracing::warn;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::I18nError;

const ROOT: &str = "msg";

/// One run of formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Strong(Vec<Span>),
    Emphasis(Vec<Span>),
    Code(Vec<Span>),
    Link { href: String, children: Vec<Span> },
    LineBreak,
}

/// A translated string, either plain or carrying inline formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Plain(String),
    Rich(Vec<Span>),
}

impl Message {
    /// Parses `raw` as markup. Text with no tags stays plain, and text that
    /// fails to parse is kept verbatim.
    pub fn from_markup(raw: &str) -> Self {
        if !raw.contains('<') && !raw.contains('&') {
            return Self::Plain(raw.to_string());
        }
        match parse_markup(raw) {
            Ok(spans) => Self::Rich(spans),
            Err(e) => {
                warn!("keeping translation as plain text: {}", e);
                Self::Plain(raw.to_string())
            }
        }
    }

    /// The text content with all formatting removed.
    #[cfg(test)]
    fn plain_text(&self) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Rich(spans) => {
                let mut out = String::new();
                write_plain(&mut out, spans);
                out
            }
        }
    }
}

#[cfg(test)]
fn write_plain(out: &mut String, spans: &[Span]) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(text),
            Span::Strong(children) | Span::Emphasis(children) | Span::Code(children) => {
                write_plain(out, children)
            }
            Span::Link { children, .. } => write_plain(out, children),
            Span::LineBreak => out.push('\n'),
        }
    }
}

/// An element still waiting for its end tag.
enum Open {
    Root,
    Strong,
    Emphasis,
    Code,
    Link(String),
    /// Unknown tags keep their children but add no formatting.
    Transparent,
}

impl Open {
    fn from_start(start: &BytesStart<'_>) -> Result<Self, I18nError> {
        let open = match start.name().as_ref() {
            b"msg" => Self::Root,
            b"strong" | b"b" => Self::Strong,
            b"em" | b"i" => Self::Emphasis,
            b"code" => Self::Code,
            b"a" => {
                let href = match start.try_get_attribute("href")? {
                    Some(attr) => attr.unescape_value()?.into_owned(),
                    None => String::new(),
                };
                Self::Link(href)
            }
            _ => Self::Transparent,
        };
        Ok(open)
    }

    fn close(self, children: Vec<Span>) -> Vec<Span> {
        match self {
            Self::Root | Self::Transparent => children,
            Self::Strong => vec![Span::Strong(children)],
            Self::Emphasis => vec![Span::Emphasis(children)],
            Self::Code => vec![Span::Code(children)],
            Self::Link(href) => vec![Span::Link { href, children }],
        }
    }
}

/// Parses a translated string with inline tags into spans.
fn parse_markup(raw: &str) -> Result<Vec<Span>, I18nError> {
    let wrapped = format!("<{ROOT}>{raw}</{ROOT}>");
    let mut reader = Reader::from_str(&wrapped);

    let mut stack: Vec<(Open, Vec<Span>)> = Vec::new();
    let mut done = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                // a closing root tag in `raw` ends the wrapper early.
                if done.is_some() {
                    return Err(I18nError::Unbalanced);
                }
                stack.push((Open::from_start(&start)?, Vec::new()));
            }
            Event::End(_) => {
                let (open, children) = stack.pop().ok_or(I18nError::Unbalanced)?;
                let spans = open.close(children);
                match stack.last_mut() {
                    Some((_, parent)) => parent.extend(spans),
                    None => done = Some(spans),
                }
            }
            Event::Empty(empty) => {
                if matches!(empty.name().as_ref(), b"br") {
                    let (_, children) = stack.last_mut().ok_or(I18nError::Unbalanced)?;
                    children.push(Span::LineBreak);
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if !text.is_empty() {
                    let (_, children) = stack.last_mut().ok_or(I18nError::Unbalanced)?;
                    children.push(Span::Text(text.into_owned()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match (done, stack.is_empty()) {
        (Some(spans), true) => Ok(spans),
        _ => Err(I18nError::Unbalanced),
    }
}
