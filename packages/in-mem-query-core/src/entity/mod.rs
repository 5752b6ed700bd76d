//! Record kinds held by the store.

mod member;
mod team;

pub use member::{Member, MemberId};
pub use team::{Team, TeamId};
