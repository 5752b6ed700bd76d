//! Shared fixtures for integration tests.

use in_mem_query_core::{EntityStore, TeamId};

/// Store with two teams and four members, rebuilt for every scenario.
pub struct Fixture {
    pub store: EntityStore,
    pub team_a: TeamId,
    pub team_b: TeamId,
}

impl Fixture {
    pub fn new() -> anyhow::Result<Self> {
        let mut store = EntityStore::new();

        let team_a = store.insert_team("teamA")?;
        let team_b = store.insert_team("teamB")?;

        store.insert_member("member1", 10, team_a)?;
        store.insert_member("member2", 20, team_a)?;
        store.insert_member("member3", 30, team_b)?;
        store.insert_member("member4", 40, team_b)?;

        Ok(Self {
            store,
            team_a,
            team_b,
        })
    }
}

pub fn usernames(members: &[&in_mem_query_core::Member]) -> Vec<String> {
    members.iter().map(|m| m.username.clone()).collect()
}
