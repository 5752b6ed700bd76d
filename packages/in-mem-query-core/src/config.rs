//! Store configuration.

/// Entity store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Initial team capacity in records
    pub initial_team_capacity: usize,
    /// Initial member capacity in records
    pub initial_member_capacity: usize,
    /// Maximum number of teams (default: unlimited)
    pub max_teams: usize,
    /// Maximum number of members (default: unlimited)
    pub max_members: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_team_capacity: 16,
            initial_member_capacity: 64,
            max_teams: usize::MAX,
            max_members: usize::MAX,
        }
    }
}
