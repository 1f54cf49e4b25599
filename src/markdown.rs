//! Narrative Markdown
//!
//! Renders project narrative text (overview / challenge / solution) with a
//! restricted pulldown-cmark pass:
//! - Inline formatting: emphasis, strong, code, links
//! - Raw HTML is escaped, never passed through
//! - Images are reduced to their alt text (the gallery shows images)

use pulldown_cmark::{html::push_html, Event, Options, Parser, Tag, TagEnd};

/// Render narrative markdown to HTML
pub fn render_narrative(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let events = restrict_events(parser);
    let mut html_output = String::with_capacity(text.len() * 3 / 2);
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn restrict_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    parser
        .filter_map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
            Event::Start(Tag::Image { .. }) | Event::End(TagEnd::Image) => None,
            other => Some(other),
        })
        .collect()
}
