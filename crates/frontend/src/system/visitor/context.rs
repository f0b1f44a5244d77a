use contracts::system::visitor::VisitorId;
use leptos::prelude::*;

use super::storage::visitor_store;

/// Visitor id as seen by the UI.
#[derive(Clone, Copy)]
pub struct VisitorContext {
    pub visitor_id: RwSignal<Option<VisitorId>>,
    pub persistent: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl VisitorContext {
    /// Re-reads the store, creating the id if it is missing. Called again
    /// after every feed load so a recovered storage clears the error.
    pub fn refresh(&self) {
        let store = visitor_store();
        self.persistent.set(store.storage().is_persistent());
        match store.get_or_create() {
            Ok(id) => {
                self.visitor_id.set(Some(id));
                self.error.set(None);
            }
            Err(e) => {
                log::warn!("visitor id unavailable: {}", e);
                self.visitor_id.set(None);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    pub fn label(&self) -> String {
        visitor_label(
            self.visitor_id.get().as_ref(),
            self.persistent.get(),
            self.error.get().as_deref(),
        )
    }

    pub fn css_class(&self) -> &'static str {
        if self.error.get().is_some() {
            "status-offline"
        } else if self.persistent.get() {
            "status-online"
        } else {
            "status-checking"
        }
    }
}

fn visitor_label(id: Option<&VisitorId>, persistent: bool, error: Option<&str>) -> String {
    match (id, error) {
        (Some(id), _) if persistent => format!("Visitor: {}", id),
        (Some(id), _) => format!("Visitor: {} (this session only)", id),
        (None, Some(e)) => format!("Visitor: unavailable ({})", e),
        (None, None) => "Visitor: …".to_string(),
    }
}

/// Provides [`VisitorContext`] and resolves the id right away.
pub fn provide_visitor_context() {
    let ctx = VisitorContext {
        visitor_id: RwSignal::new(None),
        persistent: RwSignal::new(false),
        error: RwSignal::new(None),
    };
    ctx.refresh();
    provide_context(ctx);
}

pub fn use_visitor() -> VisitorContext {
    use_context::<VisitorContext>().expect("VisitorContext not found in component tree")
}
