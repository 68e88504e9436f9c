//! Page-scoped reactive state

use dd_core::{BillingCycle, BillingCycleState};
use leptos::*;

/// Billing cycle selection shared by everything on the pricing page
///
/// Provided through context by the page that owns it; `toggle` is the
/// only way to change it.
#[derive(Clone, Copy)]
pub struct BillingStore {
    state: RwSignal<BillingCycleState>,
}

impl BillingStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(BillingCycleState::new()),
        }
    }

    /// Create a store and provide it to descendants
    pub fn provide() -> Self {
        let store = Self::new();
        provide_context(store);
        store
    }

    pub fn use_store() -> Self {
        expect_context::<Self>()
    }

    /// Tracked read of the active cycle
    pub fn current(&self) -> BillingCycle {
        self.state.with(BillingCycleState::current)
    }

    pub fn toggle(&self) {
        self.state.update(|state| {
            state.toggle();
        });
    }

    pub fn is_yearly(&self) -> Signal<bool> {
        let store = *self;
        Signal::derive(move || store.current().is_yearly())
    }
}

impl Default for BillingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_toggle() {
        let runtime = create_runtime();

        let store = BillingStore::new();
        let yearly = store.is_yearly();
        assert_eq!(store.current(), BillingCycle::Monthly);
        assert!(!yearly.get_untracked());

        store.toggle();
        assert_eq!(store.current(), BillingCycle::Yearly);
        assert!(yearly.get_untracked());

        store.toggle();
        assert_eq!(store.current(), BillingCycle::Monthly);

        runtime.dispose();
    }
}
