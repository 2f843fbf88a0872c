use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::{
        phase::{TeamSlot, VisibleMatchPhase},
        validation::validate_team_name,
    },
    state::domino_match::{Match, MatchId, MatchOptions, Team, WIN_THRESHOLD},
};

/// Team names supplied when creating a match or renaming its teams.
///
/// Missing or empty names keep the current (or placeholder) name.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct TeamNamesRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_team_name"))]
    pub team1_name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_team_name"))]
    pub team2_name: String,
}

impl From<TeamNamesRequest> for MatchOptions {
    fn from(value: TeamNamesRequest) -> Self {
        MatchOptions::new()
            .with_team1_name(value.team1_name)
            .with_team2_name(value.team2_name)
    }
}

/// Points to add to each team in a single scoring round.
///
/// Negative values are ignored, and nothing is applied once the match is over.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddPointsRequest {
    #[serde(default)]
    pub team1_points: i32,
    #[serde(default)]
    pub team2_points: i32,
}

/// Name and score of one team.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TeamScore {
    pub name: String,
    pub score: u32,
}

/// Public view of a persisted match.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MatchView {
    pub id: MatchId,
    pub team1: TeamScore,
    pub team2: TeamScore,
    pub phase: VisibleMatchPhase,
    /// Team with the higher score once the match is over.
    pub winner: Option<TeamSlot>,
    pub win_threshold: u32,
}

impl MatchView {
    /// Build the view of the match stored under `id`.
    pub fn new(id: MatchId, game: &Match) -> Self {
        let team = |team: Team| TeamScore {
            name: game.team_name(team).to_owned(),
            score: game.score(team),
        };

        Self {
            id,
            team1: team(Team::Team1),
            team2: team(Team::Team2),
            phase: game.phase().into(),
            winner: game.winner().map(Into::into),
            win_threshold: WIN_THRESHOLD,
        }
    }
}

/// Outcome of a scoring round.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ScoreUpdateResponse {
    /// `false` when the match was already over and the points were discarded.
    pub applied: bool,
    /// Current state of the match after the round.
    pub game: MatchView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_reports_names_scores_and_phase() {
        let mut game = Match::new(MatchOptions::new().with_team1_name("foo"));
        game.add_points(Team::Team1, 210);
        let view = MatchView::new(5, &game);

        assert_eq!(view.id, 5);
        assert_eq!(view.team1.name, "foo");
        assert_eq!(view.team1.score, 210);
        assert_eq!(view.team2.name, "Team2");
        assert_eq!(view.phase, VisibleMatchPhase::Over);
        assert_eq!(view.winner, Some(TeamSlot::Team1));
        assert_eq!(view.win_threshold, 200);
    }

    #[test]
    fn view_serializes_with_snake_case_phase() {
        let view = MatchView::new(1, &Match::default());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["phase"], "in_progress");
        assert_eq!(json["winner"], serde_json::Value::Null);
        assert_eq!(json["team2"]["name"], "Team2");
    }

    #[test]
    fn requests_default_missing_fields() {
        let names: TeamNamesRequest = serde_json::from_str(r#"{"team1_name":"foo"}"#).unwrap();
        assert_eq!(names.team1_name, "foo");
        assert_eq!(names.team2_name, "");

        let points: AddPointsRequest = serde_json::from_str(r#"{"team2_points":15}"#).unwrap();
        assert_eq!(points.team1_points, 0);
        assert_eq!(points.team2_points, 15);
    }

    #[test]
    fn names_request_validation_rejects_long_names() {
        let request = TeamNamesRequest {
            team1_name: "x".repeat(65),
            team2_name: String::new(),
        };
        assert!(request.validate().is_err());
        assert!(TeamNamesRequest::default().validate().is_ok());
    }
}
