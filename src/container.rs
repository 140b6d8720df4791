use std::sync::Arc;

use crate::{
    actions::fetch_member_list_request_start,
    api::MemberSource,
    error::FetchError,
    mapper::ViewMember,
    selectors::MemberListVmSelector,
    store::Store,
};

/// Ties a member source, the store and the view selector together.
///
/// This is the context handed around instead of a global store: whoever owns the
/// container owns the state.
pub struct MemberListContainer<S> {
    source: S,
    store: Store,
    selector: MemberListVmSelector,
}

impl<S: MemberSource> MemberListContainer<S> {
    pub fn new(source: S) -> Self {
        Self::with_store(source, Store::new())
    }

    pub fn with_store(source: S, store: Store) -> Self {
        Self {
            source,
            store,
            selector: MemberListVmSelector::new(),
        }
    }

    /// Kick off the one fetch the page needs. Returns how many members were loaded.
    pub fn on_mount(&mut self) -> Result<usize, FetchError> {
        fetch_member_list_request_start(&self.source, &mut self.store)
    }

    pub fn member_list_vm(&self) -> Arc<Vec<ViewMember>> {
        self.selector.select(&self.store.state())
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}
