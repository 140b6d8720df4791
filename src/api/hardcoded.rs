use super::{MemberSource, RemoteMember};
use crate::error::FetchError;

/// A source that never touches the network and always answers with the same two members.
/// Handy to try the table out without a connection or a rate limit budget.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardcodedMemberSource;

impl HardcodedMemberSource {
    pub fn members() -> Vec<RemoteMember> {
        vec![
            RemoteMember::new(
                1,
                "John",
                "https://avatars1.githubusercontent.com/u/1457912?v=4",
            ),
            RemoteMember::new(
                2,
                "Martin",
                "https://avatars2.githubusercontent.com/u/4374977?v=4",
            ),
        ]
    }
}

impl MemberSource for HardcodedMemberSource {
    fn fetch_member_list(&self) -> Result<Vec<RemoteMember>, FetchError> {
        Ok(Self::members())
    }
}
