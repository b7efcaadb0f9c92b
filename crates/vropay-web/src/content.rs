//! Section markup generated from the theme's copy table.

use crate::constants::*;
use crate::dom::{append, create};
use crate::style;
use vropay_core::{SectionCopy, SectionId, Theme};
use web_sys as web;

/// Fill `#sections` with one `<section data-section=i>` per [`SectionId`].
/// Existing children are replaced.
pub fn render(document: &web::Document, theme: &Theme) -> anyhow::Result<()> {
    let root = document
        .get_element_by_id(SECTIONS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{SECTIONS_ID}"))?;
    root.set_inner_html("");
    for section in SectionId::ALL {
        let el = section_element(document, section, theme.copy(section))?;
        append(&root, &el)?;
    }
    log::info!("[content] rendered {} sections ({})", SectionId::ALL.len(), theme.name);
    Ok(())
}

fn section_element(
    document: &web::Document,
    section: SectionId,
    copy: &SectionCopy,
) -> anyhow::Result<web::Element> {
    let label = section.label().to_ascii_lowercase();
    let el = create(document, "section", &format!("section section-{label}"))?;
    let _ = el.set_attribute("data-section", &section.index().to_string());
    let _ = el.set_attribute("id", &format!("section-{label}"));

    let heading_tag = if section == SectionId::Hero { "h1" } else { "h2" };
    let heading = create(document, heading_tag, "headline reveal")?;
    let _ = heading.set_attribute(
        "style",
        &style::stagger_style(0, 0.0, 0.0, REVEAL_DURATION_SEC),
    );
    if section == SectionId::Hero {
        // Hero headline animates letter by letter.
        let title = create(document, "span", "title letters")?;
        for (i, letter) in style::split_letters(copy.title).iter().enumerate() {
            let span = create(document, "span", "letter")?;
            span.set_text_content(Some(letter.as_str()));
            let _ = span.set_attribute(
                "style",
                &style::stagger_style(i, LETTER_STAGGER_SEC, 0.0, LETTER_DURATION_SEC),
            );
            append(&title, &span)?;
        }
        append(&heading, &title)?;
    } else {
        let title = create(document, "span", "title")?;
        title.set_text_content(Some(copy.title));
        append(&heading, &title)?;
    }
    let accent = create(document, "span", "accent")?;
    accent.set_text_content(Some(copy.accent));
    append(&heading, &accent)?;
    append(&el, &heading)?;

    if let Some(body) = copy.body {
        let p = create(document, "p", "body reveal")?;
        p.set_text_content(Some(body));
        append(&el, &p)?;
    }

    if !copy.cards.is_empty() {
        let cards = create(document, "div", "cards")?;
        for (i, card) in copy.cards.iter().enumerate() {
            let class = if card.text.is_some() { "card reveal" } else { "tag reveal" };
            let c = create(document, "div", class)?;
            let _ = c.set_attribute(
                "style",
                &style::stagger_style(i, CARD_STAGGER_SEC, 0.0, REVEAL_DURATION_SEC),
            );
            if let Some(icon) = card.icon {
                let span = create(document, "span", "icon")?;
                span.set_text_content(Some(icon));
                append(&c, &span)?;
            }
            let h = create(document, "h3", "")?;
            h.set_text_content(Some(card.title));
            append(&c, &h)?;
            if let Some(text) = card.text {
                let p = create(document, "p", "")?;
                p.set_text_content(Some(text));
                append(&c, &p)?;
            }
            append(&cards, &c)?;
        }
        append(&el, &cards)?;
    }

    if let Some(callout) = copy.callout {
        let c = create(document, "div", "callout reveal")?;
        let _ = c.set_attribute(
            "style",
            &style::stagger_style(0, 0.0, CALLOUT_DELAY_SEC, REVEAL_DURATION_SEC),
        );
        let h = create(document, "h3", "")?;
        h.set_text_content(Some(callout.title));
        append(&c, &h)?;
        if !callout.text.is_empty() {
            let p = create(document, "p", "")?;
            p.set_text_content(Some(callout.text));
            append(&c, &p)?;
        }
        append(&el, &c)?;
    }
    Ok(el)
}
