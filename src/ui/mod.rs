// src/ui/mod.rs
pub mod dispatch;
pub mod document;
pub mod modal;
pub mod render;
pub mod search;

pub use dispatch::{Action, Dispatched};
pub use document::Document;
pub use modal::{Element, ElementKind, FocusHost, Key, KeyEvent, KeyHandling, ModalController};
pub use render::Page;
pub use search::{CatalogView, SearchSource};
