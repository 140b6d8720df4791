use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    api::{MemberSource, RemoteMember},
    error::FetchError,
    store::{Action, Store},
};

/// Fetch the member list and, if that worked, put it in the store.
///
/// On failure nothing but [`Action::FetchMembersRequested`] has been dispatched, so the
/// state is exactly what it was before the call.
pub fn fetch_member_list_request_start(
    source: &dyn MemberSource,
    store: &mut Store,
) -> Result<usize, FetchError> {
    store.dispatch(Action::FetchMembersRequested);

    let member_list = match source.fetch_member_list() {
        Ok(member_list) => member_list,
        Err(e) => {
            warn!(error = %e, "fetching the member list failed");
            return Err(e);
        }
    };

    let count = member_list.len();
    store.dispatch(fetch_member_list_completed(member_list));
    info!(count, "member list updated");
    Ok(count)
}

fn fetch_member_list_completed(member_list: Vec<RemoteMember>) -> Action {
    Action::FetchMembersCompleted(Arc::new(member_list))
}
