//! Timeline HTML fragment renderer.
//!
//! # Responsibility
//! - Turn rows into fixed-shape visual blocks inside one container.
//! - Apply the image fallback chain and click-through links.
//!
//! # Invariants
//! - Rows are emitted in the order received.
//! - All row text is escaped; nothing from the input is emitted raw.

use crate::model::event::Place;
use crate::model::row::{DisplayValue, ImageRef, TimelineRow};
use crate::render::markup::{escape_html, strip_tags};

const CONTAINER_CLASS: &str = "timeline_container py-4";

/// Renders every row inside the outer container.
///
/// `stylesheet_url`, when set, is linked first inside the container.
pub fn render_timeline(rows: &[TimelineRow], stylesheet_url: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(url) = stylesheet_url {
        body.push_str(&format!(
            r#"<link rel="stylesheet" href="{}">"#,
            escape_html(url)
        ));
    }
    for row in rows {
        body.push_str(&render_row(row));
    }
    format!(r#"<div class="{CONTAINER_CLASS}">{body}</div>"#)
}

/// Renders one row block.
pub fn render_row(row: &TimelineRow) -> String {
    let title = escape_html(&row.title);
    let image = row
        .image
        .clone()
        .or_else(|| row.tag.icon_token().map(ImageRef::Icon).unwrap_or_default());
    let (image_style, image_content) = image_style_or_content(&image, &row.title);
    let click = row
        .link()
        .map(|href| {
            format!(
                r#" onclick="window.location.href = '{}';" style="cursor: pointer;""#,
                escape_html(&escape_js_string(href))
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="timeline_outer"><div class="timeline_card"><div class="timeline_info">"#,
            r#"<div class="timeline_year-age"><span class="timeline_year">{year}</span><br>"#,
            r#"<span class="timeline_age">{age}</span></div>"#,
            r#"<div class="timeline_content"><div class="timeline_text">"#,
            r#"<div class="timeline_title">{title}</div>"#,
            r#"<div class="timeline_content">{content}</div></div>"#,
            r#"<div class="timeline_image"{click}><div class="image"{image_style}>{image_content}</div></div>"#,
            r#"</div></div></div></div>"#
        ),
        year = row.year,
        age = escape_html(&row.age_label()),
        title = title,
        content = content_block(row),
        click = click,
        image_style = image_style,
        image_content = image_content,
    )
}

fn content_block(row: &TimelineRow) -> String {
    format!(
        concat!(
            r#"<div class="timeline_content_column">"#,
            r#"<div class="timeline_value">{}</div>"#,
            r#"<div class="timeline_date">{}</div>"#,
            r#"<div class="timeline_place">{}</div>"#,
            r#"</div>"#
        ),
        value_markup(&row.value),
        escape_html(&row.date_display),
        row.place.as_ref().map(place_markup).unwrap_or_default(),
    )
}

fn value_markup(value: &DisplayValue) -> String {
    match value {
        DisplayValue::Text { text } => escape_html(text),
        DisplayValue::Profile { name, url } => format!(
            r#"<a href="{}">{}</a>"#,
            escape_html(url),
            escape_html(name)
        ),
    }
}

/// Place link, or the plain short label when the host gave no URL.
fn place_markup(place: &Place) -> String {
    let short = escape_html(&place.short_name);
    match place.url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => format!(
            r#"<a href="{}" title="{}">{}</a>"#,
            escape_html(url),
            escape_html(&strip_tags(&place.full_name)),
            short
        ),
        None => short,
    }
}

/// Attribute and inner markup for the image block.
fn image_style_or_content(image: &ImageRef, title: &str) -> (String, String) {
    match image {
        ImageRef::Url(url) => (
            format!(
                r#" style="background-image: url('{}')""#,
                escape_html(&escape_js_string(url))
            ),
            String::new(),
        ),
        ImageRef::Icon(token) => (
            String::new(),
            format!(
                r#"<div title="{}" class="icon {}"></div>"#,
                escape_html(&strip_tags(title)),
                escape_html(token)
            ),
        ),
        ImageRef::None => (
            r#" style="background-image: url()""#.to_string(),
            String::new(),
        ),
    }
}

/// Escapes a value for a single-quoted script or CSS string.
fn escape_js_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::{escape_js_string, image_style_or_content, render_timeline};
    use crate::model::row::ImageRef;

    #[test]
    fn empty_rows_render_bare_container() {
        assert_eq!(
            render_timeline(&[], None),
            r#"<div class="timeline_container py-4"></div>"#
        );
    }

    #[test]
    fn stylesheet_is_linked_inside_container() {
        let html = render_timeline(&[], Some("/css/timeline.min.css"));
        assert!(html.starts_with(
            r#"<div class="timeline_container py-4"><link rel="stylesheet" href="/css/timeline.min.css">"#
        ));
    }

    #[test]
    fn image_kinds_map_to_style_or_icon() {
        let (style, content) =
            image_style_or_content(&ImageRef::Url("https://x/a.jpg".to_string()), "Birth");
        assert_eq!(style, r#" style="background-image: url('https://x/a.jpg')""#);
        assert!(content.is_empty());

        let (style, content) =
            image_style_or_content(&ImageRef::Icon("wt-fact-icon-BIRT".to_string()), "Birth");
        assert!(style.is_empty());
        assert_eq!(content, r#"<div title="Birth" class="icon wt-fact-icon-BIRT"></div>"#);

        let (style, content) = image_style_or_content(&ImageRef::None, "Birth");
        assert_eq!(style, r#" style="background-image: url()""#);
        assert!(content.is_empty());
    }

    #[test]
    fn script_strings_escape_quotes_and_backslashes() {
        assert_eq!(escape_js_string(r"a'b\c"), r"a\'b\\c");
    }
}
