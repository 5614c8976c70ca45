//! Section renderer.
//!
//! Given the ordered, language-resolved section list for a page, produce
//! the DOM patch plan that applies the content to the page's static
//! document. Sections are a small closed set of heterogeneous shapes, so
//! each type owns a bespoke patch routine rather than a schema-driven
//! generic renderer.
//!
//! The dispatcher degrades rather than fails: invisible sections, empty
//! content, and section types the page has no region for contribute no
//! patches, and a malformed section never prevents later sections from
//! being rendered.

mod patch;
mod template;

pub use patch::DomPatch;
pub use template::{template_for, PageTemplate, Region};

use serde_json::Value;

use crate::section::SectionType;

/// One section as seen by the renderer: type, visibility, and the
/// language-resolved content payload.
#[derive(Debug, Clone, Copy)]
pub struct RenderSection<'a> {
    pub section_type: SectionType,
    pub is_visible: bool,
    pub content: Option<&'a Value>,
}

/// Build the patch plan for a page from its ordered section list.
pub fn render_page(template: &PageTemplate, sections: &[RenderSection<'_>]) -> Vec<DomPatch> {
    let mut out = Vec::new();

    for section in sections {
        if !section.is_visible {
            continue;
        }
        let Some(content) = section.content else {
            continue;
        };
        let is_empty = match content.as_object() {
            Some(obj) => obj.is_empty(),
            None => true,
        };
        if is_empty {
            continue;
        }
        let Some(region) = template.region(section.section_type) else {
            continue;
        };

        match section.section_type {
            SectionType::Hero => patch_hero(region, content, &mut out),
            SectionType::About => patch_about(region, content, &mut out),
            SectionType::Treatments => patch_treatments(region, content, &mut out),
            SectionType::Trust => patch_trust(region, content, &mut out),
            SectionType::Results => patch_results(region, content, &mut out),
            SectionType::Column => patch_column(region, content, &mut out),
            SectionType::Promo => patch_promo(region, content, &mut out),
            SectionType::Location => patch_location(region, content, &mut out),
            SectionType::Cta => patch_cta(region, content, &mut out),
            // Custom sections have no fixed DOM contract.
            SectionType::Custom => {}
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Selector and field helpers
// ---------------------------------------------------------------------------

fn sel(region: &Region, part: &str) -> String {
    format!("{} {part}", region.root)
}

/// Selector for the `i`-th template element of a repeated list.
fn nth(region: &Region, part: &str, i: usize) -> String {
    format!("{} {part}:nth-of-type({})", region.root, i + 1)
}

/// Read a scalar field as text. Absent, empty, and non-scalar values
/// yield `None` so the static placeholder stays untouched.
fn text_field(content: &Value, key: &str) -> Option<String> {
    match content.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Pair a content array positionally with the region's template slots:
/// excess content entries beyond the slot count are ignored.
fn paired<'a>(content: &'a Value, key: &str, region: &Region) -> Vec<(usize, &'a Value)> {
    let slots = region.slot_count(key);
    content
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| entries.iter().take(slots).enumerate().collect())
        .unwrap_or_default()
}

fn push_text(out: &mut Vec<DomPatch>, selector: String, value: Option<String>) {
    if let Some(value) = value {
        out.push(DomPatch::set_text(selector, value));
    }
}

fn push_html(out: &mut Vec<DomPatch>, selector: String, value: Option<String>) {
    if let Some(value) = value {
        out.push(DomPatch::set_html(selector, value));
    }
}

// ---------------------------------------------------------------------------
// Per-type patch routines
// ---------------------------------------------------------------------------

fn patch_hero(region: &Region, content: &Value, out: &mut Vec<DomPatch>) {
    push_text(out, sel(region, ".hero__subtitle"), text_field(content, "label"));
    push_text(out, sel(region, ".hero__title-en"), text_field(content, "title_en"));
    push_text(out, sel(region, ".hero__title-kr"), text_field(content, "title_kr"));
    push_html(out, sel(region, ".hero__desc"), text_field(content, "description"));
}

fn patch_about(region: &Region, content: &Value, out: &mut Vec<DomPatch>) {
    push_text(out, sel(region, ".section-label"), text_field(content, "label"));
    push_html(out, sel(region, ".section-title"), text_field(content, "title"));

    let slots = region.slot_count("description");
    if let Some(paragraphs) = content.get("description").and_then(Value::as_array) {
        for (i, paragraph) in paragraphs.iter().take(slots).enumerate() {
            if let Some(s) = paragraph.as_str().filter(|s| !s.is_empty()) {
                out.push(DomPatch::set_text(nth(region, ".about__desc", i), s));
            }
        }
    }

    for (i, point) in paired(content, "points", region) {
        let base = nth(region, ".about__point", i);
        push_text(out, format!("{base} .about__point-num"), text_field(point, "num"));
        push_text(out, format!("{base} strong"), text_field(point, "title"));
        push_text(out, format!("{base} p"), text_field(point, "desc"));
    }

    if let Some(button_text) = text_field(content, "button_text") {
        out.push(DomPatch::set_text(sel(region, ".btn"), button_text));
        if let Some(link) = text_field(content, "button_link") {
            out.push(DomPatch::set_attr(sel(region, ".btn"), "href", link));
        }
    }
}

fn patch_treatments(region: &Region, content: &Value, out: &mut Vec<DomPatch>) {
    push_text(out, sel(region, ".section-label"), text_field(content, "label"));
    push_html(out, sel(region, ".section-title"), text_field(content, "title"));
    push_html(out, sel(region, ".treatments__subtitle"), text_field(content, "subtitle"));

    for (i, item) in paired(content, "items", region) {
        let base = nth(region, ".treatment-card", i);
        push_text(out, format!("{base} .treatment-card__num"), text_field(item, "num"));
        push_text(out, format!("{base} .treatment-card__title"), text_field(item, "title"));
        push_text(out, format!("{base} .treatment-card__en"), text_field(item, "en"));
        push_text(out, format!("{base} .treatment-card__desc"), text_field(item, "desc"));
        if let Some(link) = text_field(item, "link") {
            out.push(DomPatch::set_attr(base, "href", link));
        }
    }
}

fn patch_trust(region: &Region, content: &Value, out: &mut Vec<DomPatch>) {
    push_text(out, sel(region, ".section-label"), text_field(content, "label"));
    push_html(out, sel(region, ".section-title"), text_field(content, "title"));

    for (i, item) in paired(content, "items", region) {
        let base = nth(region, ".trust__item", i);
        if let Some(number) = text_field(item, "number") {
            let html = match text_field(item, "unit") {
                Some(unit) => format!("{number}<small>{unit}</small>"),
                None => number,
            };
            out.push(DomPatch::set_html(format!("{base} .trust__number"), html));
        }
        push_text(out, format!("{base} .trust__label"), text_field(item, "label"));
        push_text(out, format!("{base} .trust__desc"), text_field(item, "desc"));
    }
}

fn patch_results(region: &Region, content: &Value, out: &mut Vec<DomPatch>) {
    push_text(out, sel(region, ".section-label"), text_field(content, "label"));
    push_html(out, sel(region, ".section-title"), text_field(content, "title"));
    push_html(out, sel(region, ".results__note"), text_field(content, "note"));
    push_text(out, sel(region, ".results__more .btn"), text_field(content, "button_text"));
}

fn patch_column(region: &Region, content: &Value, out: &mut Vec<DomPatch>) {
    push_text(out, sel(region, ".section-label"), text_field(content, "label"));
    push_html(out, sel(region, ".section-title"), text_field(content, "title"));
    push_text(out, sel(region, ".column__more .btn"), text_field(content, "button_text"));
}

fn patch_promo(region: &Region, content: &Value, out: &mut Vec<DomPatch>) {
    push_text(out, sel(region, ".section-label"), text_field(content, "label"));
    push_html(out, sel(region, ".section-title"), text_field(content, "title"));

    for (i, item) in paired(content, "items", region) {
        let base = nth(region, ".promo-card", i);
        let badge_selector = format!("{base} .promo-card__badge");
        match text_field(item, "badge") {
            Some(badge) => {
                out.push(DomPatch::set_text(badge_selector.clone(), badge));
                out.push(DomPatch::Show {
                    selector: badge_selector,
                });
            }
            None => out.push(DomPatch::Hide {
                selector: badge_selector,
            }),
        }
        push_text(out, format!("{base} .promo-card__category"), text_field(item, "category"));
        push_html(out, format!("{base} .promo-card__title"), text_field(item, "title"));
        push_text(out, format!("{base} .promo-card__desc"), text_field(item, "desc"));
        if let Some(cta) = text_field(item, "cta") {
            out.push(DomPatch::set_html(
                format!("{base} .promo-card__cta"),
                format!("{cta} &rarr;"),
            ));
        }
        if let Some(link) = text_field(item, "link") {
            out.push(DomPatch::set_attr(base, "href", link));
        }
    }
}

fn patch_location(region: &Region, content: &Value, out: &mut Vec<DomPatch>) {
    push_text(out, sel(region, ".section-label"), text_field(content, "label"));
    push_text(out, sel(region, ".section-title"), text_field(content, "title"));
    push_text(out, sel(region, ".location__notice"), text_field(content, "notice"));
    push_text(out, sel(region, ".btn--primary"), text_field(content, "button_text"));

    // Info items are positional: address, phone, opening hours.
    let info_slots = region.slot_count("info");

    if info_slots > 0 {
        let base = nth(region, ".location__item", 0);
        push_text(out, format!("{base} p"), text_field(content, "address"));
        push_text(out, format!("{base} .location__sub"), text_field(content, "subway"));
    }

    if info_slots > 1 {
        if let Some(phone) = text_field(content, "phone") {
            let base = nth(region, ".location__item", 1);
            out.push(DomPatch::set_text(format!("{base} a"), phone.clone()));
            out.push(DomPatch::set_attr(
                format!("{base} a"),
                "href",
                format!("tel:{phone}"),
            ));
        }
    }

    if info_slots > 2 {
        if let Some(hours) = content.get("hours").and_then(Value::as_array) {
            let markup: String = hours
                .iter()
                .filter_map(|entry| {
                    let day = text_field(entry, "day")?;
                    let time = text_field(entry, "time")?;
                    let badge = text_field(entry, "badge")
                        .map(|b| format!(" <em class=\"location__badge\">{b}</em>"))
                        .unwrap_or_default();
                    Some(format!("<p>{day} <span>{time}</span>{badge}</p>"))
                })
                .collect();
            if !markup.is_empty() {
                let base = nth(region, ".location__item", 2);
                out.push(DomPatch::set_html(format!("{base} .location__hours"), markup));
            }
        }
    }
}

fn patch_cta(region: &Region, content: &Value, out: &mut Vec<DomPatch>) {
    push_html(out, sel(region, ".cta__title"), text_field(content, "title"));
    push_html(out, sel(region, ".cta__desc"), text_field(content, "description"));
    if let Some(button_text) = text_field(content, "button_text") {
        out.push(DomPatch::set_text(sel(region, ".btn"), button_text));
        if let Some(link) = text_field(content, "button_link") {
            out.push(DomPatch::set_attr(sel(region, ".btn"), "href", link));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::PageSlug;
    use serde_json::json;

    fn section<'a>(ty: SectionType, content: &'a Value) -> RenderSection<'a> {
        RenderSection {
            section_type: ty,
            is_visible: true,
            content: Some(content),
        }
    }

    #[test]
    fn hero_patches_text_and_rich_description() {
        let content = json!({
            "label": "TONE'S CLINIC",
            "title_kr": "맞춤 시술의 완성",
            "description": "명동의 프리미엄 피부 전문<br>1:1 맞춤"
        });
        let template = template_for(PageSlug::Home);
        let patches = render_page(&template, &[section(SectionType::Hero, &content)]);

        assert!(patches.contains(&DomPatch::set_text(
            ".hero .hero__subtitle".into(),
            "TONE'S CLINIC"
        )));
        assert!(patches.contains(&DomPatch::set_html(
            ".hero .hero__desc".into(),
            "명동의 프리미엄 피부 전문<br>1:1 맞춤"
        )));
        // title_en was absent, so its slot keeps the static fallback.
        assert!(!patches
            .iter()
            .any(|p| matches!(p, DomPatch::SetText { selector, .. } if selector.contains("title-en"))));
    }

    #[test]
    fn invisible_section_emits_nothing() {
        let content = json!({ "label": "X" });
        let template = template_for(PageSlug::Home);
        let patches = render_page(
            &template,
            &[RenderSection {
                section_type: SectionType::Hero,
                is_visible: false,
                content: Some(&content),
            }],
        );
        assert!(patches.is_empty());
    }

    #[test]
    fn missing_region_is_skipped_silently() {
        // The results page template has no treatments region.
        let content = json!({ "title": "시술 안내" });
        let template = template_for(PageSlug::Results);
        let patches = render_page(&template, &[section(SectionType::Treatments, &content)]);
        assert!(patches.is_empty());
    }

    #[test]
    fn empty_and_null_content_are_skipped() {
        let empty = json!({});
        let template = template_for(PageSlug::Home);
        assert!(render_page(&template, &[section(SectionType::Hero, &empty)]).is_empty());
        assert!(render_page(
            &template,
            &[RenderSection {
                section_type: SectionType::Hero,
                is_visible: true,
                content: None,
            }]
        )
        .is_empty());
    }

    #[test]
    fn treatments_truncate_to_template_slots() {
        // Five items against four template cards: the fifth is ignored.
        let items: Vec<_> = (1..=5)
            .map(|i| json!({ "num": format!("{i:02}"), "title": format!("시술 {i}") }))
            .collect();
        let content = json!({ "items": items });
        let template = template_for(PageSlug::Home);
        let patches = render_page(&template, &[section(SectionType::Treatments, &content)]);

        let nums: Vec<_> = patches
            .iter()
            .filter(|p| matches!(p, DomPatch::SetText { selector, .. } if selector.contains("__num")))
            .collect();
        assert_eq!(nums.len(), 4);
        assert!(!patches
            .iter()
            .any(|p| matches!(p, DomPatch::SetText { selector, .. } if selector.contains("nth-of-type(5)"))));
    }

    #[test]
    fn short_list_leaves_trailing_slots_alone() {
        let content = json!({ "items": [{ "label": "누적 시술" }] });
        let template = template_for(PageSlug::Home);
        let patches = render_page(&template, &[section(SectionType::Trust, &content)]);

        assert_eq!(
            patches,
            vec![DomPatch::set_text(
                ".trust .trust__item:nth-of-type(1) .trust__label".into(),
                "누적 시술"
            )]
        );
    }

    #[test]
    fn trust_number_composes_unit_as_html() {
        let content = json!({ "items": [{ "number": "20,000", "unit": "+" }] });
        let template = template_for(PageSlug::Home);
        let patches = render_page(&template, &[section(SectionType::Trust, &content)]);
        assert!(patches.contains(&DomPatch::set_html(
            ".trust .trust__item:nth-of-type(1) .trust__number".into(),
            "20,000<small>+</small>"
        )));
    }

    #[test]
    fn promo_badge_visibility_toggles() {
        let content = json!({
            "items": [
                { "badge": "EVENT", "category": "리프팅" },
                { "category": "스킨부스터" }
            ]
        });
        let template = template_for(PageSlug::Home);
        let patches = render_page(&template, &[section(SectionType::Promo, &content)]);

        let badge_1 = ".promo .promo-card:nth-of-type(1) .promo-card__badge".to_string();
        let badge_2 = ".promo .promo-card:nth-of-type(2) .promo-card__badge".to_string();
        assert!(patches.contains(&DomPatch::Show { selector: badge_1 }));
        assert!(patches.contains(&DomPatch::Hide { selector: badge_2 }));
    }

    #[test]
    fn location_hours_rebuild_as_single_html_block() {
        let content = json!({
            "hours": [
                { "day": "금요일", "time": "10:00 ~ 21:00", "badge": "야간진료" },
                { "day": "일요일", "time": "휴진" }
            ]
        });
        let template = template_for(PageSlug::Location);
        let patches = render_page(&template, &[section(SectionType::Location, &content)]);

        let html = patches.iter().find_map(|p| match p {
            DomPatch::SetHtml { selector, value } if selector.contains("location__hours") => {
                Some(value.clone())
            }
            _ => None,
        });
        let html = html.expect("hours block should be patched");
        assert!(html.contains("<p>금요일 <span>10:00 ~ 21:00</span> <em class=\"location__badge\">야간진료</em></p>"));
        assert!(html.contains("<p>일요일 <span>휴진</span></p>"));
    }

    #[test]
    fn cta_link_only_applies_with_button_text() {
        let template = template_for(PageSlug::Reservation);

        let with_text = json!({ "button_text": "예약하기", "button_link": "/reservation.html" });
        let patches = render_page(&template, &[section(SectionType::Cta, &with_text)]);
        assert!(patches.contains(&DomPatch::set_attr(
            ".floating-cta .btn".into(),
            "href",
            "/reservation.html"
        )));

        let link_only = json!({ "button_link": "/reservation.html" });
        let patches = render_page(&template, &[section(SectionType::Cta, &link_only)]);
        assert!(patches.is_empty());
    }

    #[test]
    fn malformed_section_does_not_block_later_sections() {
        // A trust section whose items are the wrong shape contributes
        // nothing but the following hero still renders.
        let bad = json!({ "items": "not-an-array" });
        let good = json!({ "label": "TONE'S" });
        let template = template_for(PageSlug::Home);
        let patches = render_page(
            &template,
            &[
                section(SectionType::Trust, &bad),
                section(SectionType::Hero, &good),
            ],
        );
        assert!(patches.contains(&DomPatch::set_text(
            ".hero .hero__subtitle".into(),
            "TONE'S"
        )));
    }
}
