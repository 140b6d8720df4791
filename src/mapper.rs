use serde::{Deserialize, Serialize};

use crate::api::RemoteMember;

/// A member the way the table wants it
#[derive(Debug, Clone, Default, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewMember {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

pub fn map_member_from_model_to_vm(member: &RemoteMember) -> ViewMember {
    ViewMember {
        id: member.id,
        name: member.login.clone(),
        avatar_url: member.avatar_url.clone(),
    }
}

pub fn map_member_list_from_model_to_vm(member_list: &[RemoteMember]) -> Vec<ViewMember> {
    member_list.iter().map(map_member_from_model_to_vm).collect()
}
