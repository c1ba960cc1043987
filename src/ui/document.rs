// src/ui/document.rs
// In-memory page surface used by the binary and tests
use crate::ui::modal::{Element, FocusHost};

#[derive(Debug, Clone)]
pub struct Document {
    // Document order
    elements: Vec<Element>,
    active: Option<String>,
    modal_hidden: bool,
    scroll_locked: bool,
}

impl Document {
    /// A page whose modal region starts hidden, with focus on the body
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            active: None,
            modal_hidden: true,
            scroll_locked: false,
        }
    }

    pub fn modal_hidden(&self) -> bool {
        self.modal_hidden
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn set_disabled(&mut self, id: &str, disabled: bool) {
        if let Some(el) = self.elements.iter_mut().find(|el| el.id == id) {
            el.disabled = disabled;
        }
    }

    /// Drop focus back to the page body
    pub fn blur(&mut self) {
        self.active = None;
    }

    fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    fn rendered(&self, el: &Element) -> bool {
        el.rendered && !(el.in_modal && self.modal_hidden)
    }

    fn tab_stops(&self) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|el| el.is_focusable() && self.rendered(el))
            .filter(|el| el.tab_index.map_or(true, |t| t >= 0))
            .collect()
    }
}

impl FocusHost for Document {
    fn active_element(&self) -> Option<String> {
        self.active.clone()
    }

    fn focus(&mut self, id: &str) -> bool {
        let focusable = match self.element(id) {
            Some(el) => el.is_focusable() && self.rendered(el),
            None => false,
        };
        if focusable {
            self.active = Some(id.to_string());
        }
        focusable
    }

    fn modal_elements(&self) -> Vec<Element> {
        self.elements.iter().filter(|el| el.in_modal).cloned().collect()
    }

    fn in_modal(&self, id: &str) -> bool {
        self.element(id).map_or(false, |el| el.in_modal)
    }

    fn is_rendered(&self, id: &str) -> bool {
        self.element(id).map_or(false, |el| self.rendered(el))
    }

    fn set_modal_hidden(&mut self, hidden: bool) {
        self.modal_hidden = hidden;
        // Hiding the region drops focus held inside it
        if hidden {
            if let Some(active) = self.active.clone() {
                if self.in_modal(&active) {
                    self.active = None;
                }
            }
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn advance_focus(&mut self, backwards: bool) {
        let stops = self.tab_stops();
        if stops.is_empty() {
            return;
        }

        let current = self
            .active
            .as_deref()
            .and_then(|id| stops.iter().position(|el| el.id == id));
        let next = match (current, backwards) {
            (None, false) => 0,
            (None, true) => stops.len() - 1,
            (Some(i), false) => (i + 1) % stops.len(),
            (Some(i), true) => (i + stops.len() - 1) % stops.len(),
        };

        let id = stops[next].id.clone();
        self.active = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::ElementKind;

    #[test]
    fn hidden_modal_elements_cannot_take_focus() {
        let mut doc = Document::new(vec![
            Element::new("page-btn", ElementKind::Button),
            Element::new("modal-btn", ElementKind::Button).in_modal(),
        ]);

        assert!(!doc.focus("modal-btn"));
        assert!(doc.focus("page-btn"));

        doc.set_modal_hidden(false);
        assert!(doc.focus("modal-btn"));

        doc.set_modal_hidden(true);
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn sequential_navigation_wraps() {
        let mut doc = Document::new(vec![
            Element::new("a", ElementKind::Button),
            Element::new("skip", ElementKind::Other).with_tab_index(-1),
            Element::new("b", ElementKind::Input),
        ]);

        doc.advance_focus(false);
        assert_eq!(doc.active_element().as_deref(), Some("a"));
        doc.advance_focus(false);
        assert_eq!(doc.active_element().as_deref(), Some("b"));
        doc.advance_focus(false);
        assert_eq!(doc.active_element().as_deref(), Some("a"));
        doc.advance_focus(true);
        assert_eq!(doc.active_element().as_deref(), Some("b"));
    }
}
