//! In-memory match state: two team names, two scores and the rules guarding them.

/// Score at which a match ends and its scores become read-only.
pub const WIN_THRESHOLD: u32 = 200;

/// Identifier assigned by the match store when a match is first persisted.
pub type MatchId = i64;

/// One of the two sides of a domino match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// First team, listed on the left of the scoreboard.
    Team1,
    /// Second team.
    Team2,
}

impl Team {
    /// Placeholder name used when no explicit team name was supplied.
    pub const fn default_name(self) -> &'static str {
        match self {
            Team::Team1 => "Team1",
            Team::Team2 => "Team2",
        }
    }
}

/// Lifecycle of a match. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Both scores are below [`WIN_THRESHOLD`].
    InProgress,
    /// At least one score reached [`WIN_THRESHOLD`].
    Over,
}

/// Optional overrides applied when a match is created.
///
/// Empty names are ignored so the team keeps its placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOptions {
    team1_name: Option<String>,
    team2_name: Option<String>,
}

impl MatchOptions {
    /// Options without any override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the first team's name.
    pub fn with_team1_name(mut self, name: impl Into<String>) -> Self {
        self.team1_name = Some(name.into());
        self
    }

    /// Override the second team's name.
    pub fn with_team2_name(mut self, name: impl Into<String>) -> Self {
        self.team2_name = Some(name.into());
        self
    }
}

/// Scores and team names of a single match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    id: Option<MatchId>,
    team1_name: String,
    team2_name: String,
    score1: u32,
    score2: u32,
}

impl Match {
    /// Build a fresh, unpersisted match with zero scores.
    pub fn new(options: MatchOptions) -> Self {
        let mut game = Self {
            id: None,
            team1_name: Team::Team1.default_name().to_owned(),
            team2_name: Team::Team2.default_name().to_owned(),
            score1: 0,
            score2: 0,
        };

        if let Some(name) = options.team1_name {
            game.rename_team(Team::Team1, name);
        }
        if let Some(name) = options.team2_name {
            game.rename_team(Team::Team2, name);
        }
        game
    }

    /// Rebuild a match from its persisted columns.
    pub(crate) fn restore(
        id: MatchId,
        team1_name: String,
        team2_name: String,
        score1: u32,
        score2: u32,
    ) -> Self {
        Self {
            id: Some(id),
            team1_name,
            team2_name,
            score1,
            score2,
        }
    }

    /// Attach the identifier handed out by the store. An existing identifier is kept.
    pub(crate) fn with_id(mut self, id: MatchId) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
        }
        self
    }

    /// Identifier of the persisted record, `None` until the match is stored.
    pub fn id(&self) -> Option<MatchId> {
        self.id
    }

    /// Display name of `team`.
    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::Team1 => &self.team1_name,
            Team::Team2 => &self.team2_name,
        }
    }

    /// Rename `team`. Empty names leave the current name untouched.
    pub fn rename_team(&mut self, team: Team, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        match team {
            Team::Team1 => self.team1_name = name,
            Team::Team2 => self.team2_name = name,
        }
    }

    /// Add `points` to `team`.
    ///
    /// Nothing happens once the match is over or when `points` is negative; the
    /// scores only ever grow while the match is in progress.
    pub fn add_points(&mut self, team: Team, points: i32) {
        if self.is_over() {
            return;
        }
        let Ok(points) = u32::try_from(points) else {
            return;
        };

        let score = match team {
            Team::Team1 => &mut self.score1,
            Team::Team2 => &mut self.score2,
        };
        *score = score.saturating_add(points);
    }

    /// Current score of `team`.
    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::Team1 => self.score1,
            Team::Team2 => self.score2,
        }
    }

    /// Whether either team reached [`WIN_THRESHOLD`].
    pub fn is_over(&self) -> bool {
        self.score1 >= WIN_THRESHOLD || self.score2 >= WIN_THRESHOLD
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> MatchPhase {
        if self.is_over() {
            MatchPhase::Over
        } else {
            MatchPhase::InProgress
        }
    }

    /// Team with the higher score once the match is over. Ties have no winner.
    pub fn winner(&self) -> Option<Team> {
        if !self.is_over() {
            return None;
        }
        match self.score1.cmp(&self.score2) {
            std::cmp::Ordering::Greater => Some(Team::Team1),
            std::cmp::Ordering::Less => Some(Team::Team2),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(MatchOptions::default())
    }
}
