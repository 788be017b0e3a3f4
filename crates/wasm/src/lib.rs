mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{MeasuredLayout, RevealSet, ScrollSpy, compute_active_section};
use folio_protocol::{SectionBounds, SectionId};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Window};

use crate::dom::DomLayout;

struct PageState {
    spy: ScrollSpy,
    reveals: RevealSet,
    reveal_elements: Vec<Element>,
}

impl PageState {
    fn refresh(&mut self, window: &Window, document: &Document) {
        let offset = window.scroll_y().unwrap_or(0.0);
        if let Some(active) = self.spy.on_scroll(offset, &DomLayout { document }) {
            dom::highlight_nav(document, active);
        }

        if self.reveals.all_revealed() {
            return;
        }
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let bounds = self.reveal_elements.iter().map(dom::viewport_bounds);
        for index in self.reveals.update(0.0, viewport_height, bounds) {
            dom::mark_visible(&self.reveal_elements[index]);
        }
    }
}

/// Live scroll-spy attached to the page.
///
/// Holds the window `scroll` listener and the navigation click listener.
/// Both are removed when the handle is dropped (`free()` from JS) or
/// `unmount()` is called, whichever comes first.
#[wasm_bindgen]
pub struct ScrollSpyHandle {
    window: Window,
    document: Document,
    state: Rc<RefCell<PageState>>,
    on_scroll: Closure<dyn FnMut()>,
    on_click: Closure<dyn FnMut(Event)>,
    attached: bool,
}

#[wasm_bindgen]
impl ScrollSpyHandle {
    /// Id of the highlighted section.
    pub fn active_section(&self) -> String {
        self.state.borrow().spy.active().as_str().to_string()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn unmount(&mut self) {
        self.detach();
    }
}

impl ScrollSpyHandle {
    fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        let removed = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref())
            .and_then(|()| {
                self.document.remove_event_listener_with_callback(
                    "click",
                    self.on_click.as_ref().unchecked_ref(),
                )
            });
        if let Err(e) = removed {
            web_sys::console::error_1(&e);
        }
    }
}

impl Drop for ScrollSpyHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Attach the scroll-spy to the current page and run one initial pass so the
/// highlight and above-the-fold reveals are correct before the first scroll.
#[wasm_bindgen]
pub fn mount() -> Result<ScrollSpyHandle, JsError> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsError::new("no document"))?;

    let reveal_elements = dom::query_all(&document, ".reveal");
    let state = Rc::new(RefCell::new(PageState {
        spy: ScrollSpy::new(),
        reveals: RevealSet::new(reveal_elements.len()),
        reveal_elements,
    }));

    let on_scroll = {
        let (window, document, state) = (window.clone(), document.clone(), state.clone());
        Closure::<dyn FnMut()>::new(move || {
            state.borrow_mut().refresh(&window, &document);
        })
    };

    let on_click = {
        let document = document.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(id) = clicked_section(&event) else {
                return;
            };
            event.prevent_default();
            dom::scroll_into_view(&document, id);
        })
    };

    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .map_err(|e| JsError::new(&format!("failed to attach scroll listener: {e:?}")))?;

    // From here on the handle owns the registration and releases it on drop.
    let handle = ScrollSpyHandle {
        window,
        document,
        state,
        on_scroll,
        on_click,
        attached: true,
    };

    handle
        .document
        .add_event_listener_with_callback("click", handle.on_click.as_ref().unchecked_ref())
        .map_err(|e| JsError::new(&format!("failed to attach click listener: {e:?}")))?;

    handle
        .state
        .borrow_mut()
        .refresh(&handle.window, &handle.document);
    Ok(handle)
}

/// Smooth-scroll to a section by its id (`"home"`, `"about"`, ...).
#[wasm_bindgen]
pub fn scroll_to_section(id: &str) -> Result<(), JsError> {
    let id: SectionId = id.parse().map_err(|e: folio_protocol::ParseSectionIdError| {
        JsError::new(&e.to_string())
    })?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsError::new("no document"))?;
    dom::scroll_into_view(&document, id);
    Ok(())
}

/// Compute the active section from host-measured geometry.
///
/// `geometry` holds `[top, height]` pairs for all six sections in display
/// order; `NaN` marks an unmeasured section. Returns `undefined` when no
/// section contains the biased offset.
#[wasm_bindgen]
pub fn active_section_for(scroll_offset: f64, geometry: &[f64]) -> Result<Option<String>, JsError> {
    let layout = layout_from_geometry(geometry).ok_or_else(|| {
        JsError::new(&format!(
            "expected {} geometry values, got {}",
            SectionId::ALL.len() * 2,
            geometry.len()
        ))
    })?;
    Ok(compute_active_section(scroll_offset, &layout).map(|id| id.as_str().to_string()))
}

fn layout_from_geometry(geometry: &[f64]) -> Option<MeasuredLayout> {
    if geometry.len() != SectionId::ALL.len() * 2 {
        return None;
    }
    let mut layout = MeasuredLayout::new();
    for (id, pair) in SectionId::ALL.into_iter().zip(geometry.chunks_exact(2)) {
        let (top, height) = (pair[0], pair[1]);
        if top.is_finite() && height.is_finite() {
            layout.set(id, SectionBounds::new(top, height));
        }
    }
    Some(layout)
}

fn clicked_section(event: &Event) -> Option<SectionId> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let link = target.closest("[data-section]").ok()??;
    link.get_attribute("data-section")?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SectionLayout;

    #[test]
    fn geometry_must_cover_six_sections() {
        assert!(layout_from_geometry(&[0.0, 800.0]).is_none());
        assert!(layout_from_geometry(&[0.0; 12]).is_some());
    }

    #[test]
    fn nan_marks_unmeasured_sections() {
        let geometry = [
            0.0, 800.0, //
            f64::NAN, f64::NAN, //
            1400.0, 500.0, //
            f64::NAN, 0.0, //
            f64::NAN, 0.0, //
            f64::NAN, 0.0,
        ];
        let layout = layout_from_geometry(&geometry).unwrap();
        assert!(layout.bounds(SectionId::About).is_none());
        assert_eq!(
            compute_active_section(750.0, &layout),
            None,
            "about is unmeasured"
        );
        assert_eq!(
            compute_active_section(1350.0, &layout),
            Some(SectionId::Education)
        );
    }
}
