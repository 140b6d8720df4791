use std::sync::Arc;

use tracing::debug;

use crate::api::RemoteMember;

/// Things that can happen to the application state
#[derive(Debug, Clone)]
pub enum Action {
    /// A fetch was started. The state doesn't track in-flight requests so reducers ignore it.
    FetchMembersRequested,
    /// GitHub answered; the payload replaces the current list wholesale
    FetchMembersCompleted(Arc<Vec<RemoteMember>>),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::FetchMembersRequested => "FETCH_MEMBERS_REQUESTED",
            Action::FetchMembersCompleted(_) => "FETCH_MEMBERS_COMPLETED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberListState {
    pub member_list: Arc<Vec<RemoteMember>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub members: Arc<MemberListState>,
}

/// Returns the very same `Arc` when the action doesn't concern the member list,
/// so that anything keyed on identity downstream stays valid.
pub fn member_list_reducer(state: &Arc<MemberListState>, action: &Action) -> Arc<MemberListState> {
    match action {
        Action::FetchMembersCompleted(member_list) => Arc::new(MemberListState {
            member_list: Arc::clone(member_list),
        }),
        _ => Arc::clone(state),
    }
}

pub fn app_reducer(state: &Arc<AppState>, action: &Action) -> Arc<AppState> {
    let members = member_list_reducer(&state.members, action);
    if Arc::ptr_eq(&members, &state.members) {
        return Arc::clone(state);
    }
    Arc::new(AppState { members })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState)>;

/// Holds the application state and the listeners interested in it.
///
/// The only way to change the state is [`Store::dispatch`], which runs on the caller's
/// thread and only calls listeners back if the reducer produced a new state.
pub struct Store {
    state: Arc<AppState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn dispatch(&mut self, action: Action) {
        let next = app_reducer(&self.state, &action);
        let changed = !Arc::ptr_eq(&next, &self.state);
        debug!(action = action.kind(), changed, "dispatched");

        if !changed {
            return;
        }
        self.state = next;

        let state = Arc::clone(&self.state);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&state);
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether the listener was still registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }
}
