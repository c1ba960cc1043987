// src/ui/modal.rs
use serde::{Deserialize, Serialize};

/// Id of the field that receives focus first when the checkout modal opens
pub const PREFERRED_FIELD_ID: &str = "name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Link,
    Button,
    Input,
    Select,
    TextArea,
    Other,
}

/// What the controller needs to know about a page element to manage focus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    #[serde(default)]
    pub href: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub tab_index: Option<i32>,
    /// Laid out on the page (not display:none)
    #[serde(default = "default_true")]
    pub rendered: bool,
    #[serde(default)]
    pub in_modal: bool,
}

fn default_true() -> bool {
    true
}

impl Element {
    pub fn new(id: &str, kind: ElementKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            href: kind == ElementKind::Link,
            disabled: false,
            tab_index: None,
            rendered: true,
            in_modal: false,
        }
    }

    pub fn in_modal(mut self) -> Self {
        self.in_modal = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Links with href, enabled form controls, and anything with a non-negative tab stop
    pub fn is_focusable(&self) -> bool {
        let by_kind = match self.kind {
            ElementKind::Link => self.href,
            ElementKind::Button
            | ElementKind::Input
            | ElementKind::Select
            | ElementKind::TextArea => !self.disabled,
            ElementKind::Other => false,
        };
        by_kind || matches!(self.tab_index, Some(t) if t != -1)
    }
}

/// The page surface the modal controller drives
pub trait FocusHost {
    /// Currently focused element, `None` when focus is on the page body
    fn active_element(&self) -> Option<String>;

    /// Move focus; returns false if the element can't receive focus right now
    fn focus(&mut self, id: &str) -> bool;

    /// Elements inside the modal, in document order
    fn modal_elements(&self) -> Vec<Element>;

    /// Whether the element sits inside the modal region
    fn in_modal(&self, id: &str) -> bool;

    /// Whether the element is currently laid out
    fn is_rendered(&self, id: &str) -> bool;

    fn set_modal_hidden(&mut self, hidden: bool);

    fn set_scroll_locked(&mut self, locked: bool);

    /// Default sequential focus navigation, used when a Tab press is not intercepted
    fn advance_focus(&mut self, backwards: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

/// How a key press was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyHandling {
    pub prevent_default: bool,
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Checkout modal lifecycle with focus capture, trapping and restoration
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
    last_focused: Option<String>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Show the modal and move focus into it
    pub fn open<H: FocusHost>(&mut self, host: &mut H) {
        if self.is_open() {
            return;
        }

        self.last_focused = host.active_element();
        host.set_modal_hidden(false);
        host.set_scroll_locked(true);
        self.state = ModalState::Open;

        let elements = host.modal_elements();
        let target = elements
            .iter()
            .find(|el| el.id == PREFERRED_FIELD_ID)
            .or_else(|| elements.iter().find(|el| el.is_focusable()));
        if let Some(target) = target {
            host.focus(&target.id);
        }

        log::info!("Checkout modal opened");
    }

    /// Hide the modal and give focus back to where it was before opening
    pub fn close<H: FocusHost>(&mut self, host: &mut H) {
        if !self.is_open() {
            return;
        }

        host.set_modal_hidden(true);
        host.set_scroll_locked(false);
        self.state = ModalState::Closed;

        if let Some(id) = self.last_focused.take() {
            if !host.focus(&id) {
                log::debug!("Could not restore focus to {}", id);
            }
        }

        log::info!("Checkout modal closed");
    }

    /// Global keydown hook; only active while the modal is open
    pub fn on_key<H: FocusHost>(&mut self, host: &mut H, event: KeyEvent) -> KeyHandling {
        if !self.is_open() {
            return KeyHandling::default();
        }

        match event.key {
            Key::Escape => {
                self.close(host);
                KeyHandling {
                    prevent_default: true,
                    closed: true,
                }
            }
            Key::Tab => KeyHandling {
                prevent_default: self.trap_focus(host, event.shift),
                closed: false,
            },
            _ => KeyHandling::default(),
        }
    }

    // Returns true when focus was moved here instead of by default navigation
    fn trap_focus<H: FocusHost>(&self, host: &mut H, backwards: bool) -> bool {
        let active = host.active_element();
        let focusables: Vec<Element> = host
            .modal_elements()
            .into_iter()
            .filter(|el| el.is_focusable())
            .filter(|el| host.is_rendered(&el.id) || active.as_deref() == Some(el.id.as_str()))
            .collect();

        let (first, last) = match (focusables.first(), focusables.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return false,
        };

        let outside = match active.as_deref() {
            Some(id) => !host.in_modal(id),
            None => true,
        };

        if backwards {
            if outside || active.as_deref() == Some(first.id.as_str()) {
                host.focus(&last.id);
                return true;
            }
        } else if outside || active.as_deref() == Some(last.id.as_str()) {
            host.focus(&first.id);
            return true;
        }

        false
    }
}
