//! DOM measurement and class toggling.

use folio_core::SectionLayout;
use folio_core::html::{ACTIVE_CLASS, VISIBLE_CLASS};
use folio_protocol::{SectionBounds, SectionId};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Reads section geometry straight from the live document.
pub(crate) struct DomLayout<'a> {
    pub document: &'a Document,
}

impl SectionLayout for DomLayout<'_> {
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        let element = self
            .document
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Move the active class to every navigation entry pointing at `active`.
pub(crate) fn highlight_nav(document: &Document, active: SectionId) {
    for link in query_all(document, ".nav-link[data-section]") {
        let selected = link.get_attribute("data-section").as_deref() == Some(active.as_str());
        if let Err(e) = link.class_list().toggle_with_force(ACTIVE_CLASS, selected) {
            web_sys::console::error_1(&e);
        }
    }
}

/// Viewport-relative bounds of an element; `None` when it is not rendered.
pub(crate) fn viewport_bounds(element: &Element) -> Option<SectionBounds> {
    let rect = element.get_bounding_client_rect();
    (rect.height() > 0.0).then(|| SectionBounds::new(rect.top(), rect.height()))
}

pub(crate) fn mark_visible(element: &Element) {
    if let Err(e) = element.class_list().add_1(VISIBLE_CLASS) {
        web_sys::console::error_1(&e);
    }
}

/// Smooth-scroll the section into view. Unmounted sections are ignored.
pub(crate) fn scroll_into_view(document: &Document, id: SectionId) {
    if let Some(element) = document.get_element_by_id(id.as_str()) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
