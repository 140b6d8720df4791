pub mod actions;
pub mod api;
pub mod config;
pub mod container;
pub mod error;
pub mod mapper;
pub mod render;
pub mod selectors;
pub mod store;

pub use api::{GitHubMemberApi, HardcodedMemberSource, MemberSource, RemoteMember};
pub use config::{get_configuration, Configuration, Overrides};
pub use container::MemberListContainer;
pub use error::{ConfigError, FetchError, RenderError};
pub use mapper::ViewMember;
