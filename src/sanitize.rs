//! Archive content sanitization
//!
//! Archive bodies are stored as raw HTML by the CMS. They only reach the
//! DOM (`inner_html`) through [`clean_content`].

fn cleaner() -> ammonia::Builder<'static> {
    let mut builder = ammonia::Builder::default();
    builder
        .add_generic_attributes(&["class", "style"])
        .add_tag_attributes("img", &["width", "height", "loading"])
        .add_tags(&["figure", "figcaption", "video", "source"])
        .add_tag_attributes("video", &["src", "controls", "poster"])
        .add_tag_attributes("source", &["src", "type"]);
    builder
}

/// Strip scripts, event handlers and unsafe URLs from archive markup
pub fn clean_content(html: &str) -> String {
    cleaner().clean(html).to_string()
}
