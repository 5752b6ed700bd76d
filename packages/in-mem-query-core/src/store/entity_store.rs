//! Insertion and retrieval of team and member records.
//!
//! The store has:
//! - One insertion-ordered sequence per record kind
//! - One ID sequence per record kind, starting at 1
//! - Referential integrity from members to teams, checked on insert

use std::collections::HashMap;

use crate::config::StoreConfig;
use crate::entity::{Member, MemberId, Team, TeamId};
use crate::error::QueryError;
use crate::query::{MemberQuery, QueryFactory};

/// In-memory store of teams and members.
///
/// Insertion takes `&mut self` and querying borrows `&self`, so records
/// cannot be inserted while a query over the store is alive.
#[derive(Debug)]
pub struct EntityStore {
    config: StoreConfig,
    /// Teams in insertion order
    teams: Vec<Team>,
    /// Members in insertion order
    members: Vec<Member>,
    /// Team ID to position in `teams`
    team_index: HashMap<TeamId, usize>,
    /// Member ID to position in `members`
    member_index: HashMap<MemberId, usize>,
    next_team_id: u64,
    next_member_id: u64,
}

impl EntityStore {
    /// Creates an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            teams: Vec::with_capacity(config.initial_team_capacity),
            members: Vec::with_capacity(config.initial_member_capacity),
            team_index: HashMap::with_capacity(config.initial_team_capacity),
            member_index: HashMap::with_capacity(config.initial_member_capacity),
            next_team_id: 1,
            next_member_id: 1,
            config,
        }
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Inserts a team and returns its fresh identity.
    ///
    /// # Errors
    /// `QueryError::CapacityExceeded` if `max_teams` teams are already stored.
    pub fn insert_team(&mut self, name: impl Into<String>) -> Result<TeamId, QueryError> {
        if self.teams.len() >= self.config.max_teams {
            tracing::warn!("Rejected team insert: limit {} reached", self.config.max_teams);
            return Err(QueryError::CapacityExceeded {
                entity: "team",
                limit: self.config.max_teams,
            });
        }

        let id = TeamId(self.next_team_id);
        self.next_team_id += 1;

        let team = Team::new(id, name.into());
        tracing::debug!("Inserted team {} '{}'", id, team.name);
        self.team_index.insert(id, self.teams.len());
        self.teams.push(team);
        Ok(id)
    }

    /// Inserts a member belonging to `team`.
    ///
    /// # Arguments
    /// * `username` - Member login name
    /// * `age` - Member age
    /// * `team` - Owning team, which must already be in the store
    ///
    /// # Errors
    /// - `QueryError::UnknownTeam` if `team` was never inserted
    /// - `QueryError::CapacityExceeded` if `max_members` is reached
    pub fn insert_member(
        &mut self,
        username: impl Into<String>,
        age: i32,
        team: TeamId,
    ) -> Result<MemberId, QueryError> {
        if !self.team_index.contains_key(&team) {
            tracing::warn!("Rejected member insert: team {} not found", team);
            return Err(QueryError::UnknownTeam { team });
        }
        self.push_member(username.into(), age, Some(team))
    }

    /// Inserts a member with no team assigned.
    pub fn insert_unassigned_member(
        &mut self,
        username: impl Into<String>,
        age: i32,
    ) -> Result<MemberId, QueryError> {
        self.push_member(username.into(), age, None)
    }

    fn push_member(
        &mut self,
        username: String,
        age: i32,
        team: Option<TeamId>,
    ) -> Result<MemberId, QueryError> {
        if self.members.len() >= self.config.max_members {
            tracing::warn!(
                "Rejected member insert: limit {} reached",
                self.config.max_members
            );
            return Err(QueryError::CapacityExceeded {
                entity: "member",
                limit: self.config.max_members,
            });
        }

        let id = MemberId(self.next_member_id);
        self.next_member_id += 1;

        tracing::debug!("Inserted member {} '{}' (age {})", id, username, age);
        self.member_index.insert(id, self.members.len());
        self.members.push(Member::new(id, username, age, team));
        Ok(id)
    }

    /// Returns all members in insertion order.
    pub fn all_members(&self) -> &[Member] {
        &self.members
    }

    /// Returns all teams in insertion order.
    pub fn all_teams(&self) -> &[Team] {
        &self.teams
    }

    /// Looks up a team by identity.
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.team_index.get(&id).map(|&pos| &self.teams[pos])
    }

    /// Looks up a member by identity.
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.member_index.get(&id).map(|&pos| &self.members[pos])
    }

    /// Returns the team a member belongs to, if any.
    pub fn team_of(&self, member: &Member) -> Option<&Team> {
        member.team.and_then(|id| self.team(id))
    }

    /// Returns the number of stored teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Returns the number of stored members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Removes every record and restarts both ID sequences at 1.
    ///
    /// IDs handed out before `clear` become invalid. They are not rejected:
    /// a stale `TeamId` or `MemberId` names whichever record is inserted
    /// under that number afterwards.
    pub fn clear(&mut self) {
        tracing::debug!(
            "Clearing store ({} teams, {} members)",
            self.teams.len(),
            self.members.len()
        );
        self.teams.clear();
        self.members.clear();
        self.team_index.clear();
        self.member_index.clear();
        self.next_team_id = 1;
        self.next_member_id = 1;
    }

    /// Returns a query factory bound to this store.
    pub fn query_factory(&self) -> QueryFactory<'_> {
        QueryFactory::new(self)
    }

    /// Starts a fluent query over members.
    pub fn select_from_member(&self) -> MemberQuery<'_> {
        MemberQuery::new(self)
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
