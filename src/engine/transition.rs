//! Transition engine: advance a match by one point.
//!
//! Every function here takes a state and returns the next one. The public
//! entry points borrow the caller's state and clone it; the game/set
//! cascade takes the intermediate state by value, since nobody else holds
//! it.
//!
//! ```text
//!   advance_service_game ─┐
//!                         ├─> player_wins_game ─> player_wins_set
//!   advance_tiebreak ─────┘
//! ```

use crate::core::{CompletedSet, MatchState, PlayerId};
use crate::rules::MatchRules;

/// `(winner, loser)` of a point given whether the server won it.
#[must_use]
pub fn point_winner_loser(
    server: &PlayerId,
    returner: &PlayerId,
    server_won: bool,
) -> (PlayerId, PlayerId) {
    if server_won {
        (server.clone(), returner.clone())
    } else {
        (returner.clone(), server.clone())
    }
}

fn award_point(state: &mut MatchState, server_won: bool) {
    let scorer = if server_won { &state.server } else { &state.returner };
    state.cur_game_score[scorer] += 1;
}

/// Play one point, as a service game point or a tiebreak point.
///
/// The caller must not pass a finished match; the sequence processor
/// checks this before every point.
#[must_use]
pub fn advance_point<R: MatchRules + ?Sized>(
    server_won: bool,
    state: &MatchState,
    rules: &R,
) -> MatchState {
    debug_assert!(!state.is_over, "Point applied to a finished match");

    if state.is_tiebreak {
        advance_tiebreak(server_won, state, rules)
    } else {
        advance_service_game(server_won, state, rules)
    }
}

/// Play one point of a service game.
#[must_use]
pub fn advance_service_game<R: MatchRules + ?Sized>(
    server_won: bool,
    state: &MatchState,
    rules: &R,
) -> MatchState {
    let mut next = state.clone();
    award_point(&mut next, server_won);

    let server_points = next.cur_game_score[&next.server];
    let returner_points = next.cur_game_score[&next.returner];

    if !rules.service_game_over(server_points, returner_points) {
        return next;
    }

    let (winner, loser) = point_winner_loser(&next.server, &next.returner, server_won);
    player_wins_game(next, &winner, &loser, rules)
}

/// Play one point of a tiebreak.
///
/// Serve rotates inside the tiebreak relative to whoever would have served
/// the game under the normal rotation. `total_games_played` is untouched
/// until the tiebreak ends.
#[must_use]
pub fn advance_tiebreak<R: MatchRules + ?Sized>(
    server_won: bool,
    state: &MatchState,
    rules: &R,
) -> MatchState {
    let mut next = state.clone();
    award_point(&mut next, server_won);

    let server_points = next.cur_game_score[&next.server];
    let returner_points = next.cur_game_score[&next.returner];
    let is_final_set = rules.is_final_set(next.set_num);

    if rules.tiebreak_over(server_points, returner_points, is_final_set) {
        let (winner, loser) = point_winner_loser(&next.server, &next.returner, server_won);
        return player_wins_game(next, &winner, &loser, rules);
    }

    let total_points = next.points_in_game();
    let (start_server, start_returner) =
        rules.roles_at_game_start(next.total_games_played, &next.first_server, &next.first_returner);

    let (server, returner) = rules.tiebreak_roles(total_points, &start_server, &start_returner);
    next.server = server;
    next.returner = returner;

    next
}

/// Record a game won by `winner`, cascading into the set if it is over.
///
/// Roles for the next game come from the new `total_games_played`. The
/// tiebreak flag for the next game is evaluated on the set score after any
/// set reset, keyed by player identity.
#[must_use]
pub fn player_wins_game<R: MatchRules + ?Sized>(
    mut state: MatchState,
    winner: &PlayerId,
    loser: &PlayerId,
    rules: &R,
) -> MatchState {
    state.cur_set_score[winner] += 1;
    state.total_games_played += 1;

    let (server, returner) =
        rules.roles_at_game_start(state.total_games_played, &state.first_server, &state.first_returner);
    state.server = server;
    state.returner = returner;

    let is_final_set = rules.is_final_set(state.set_num);

    if rules.set_win_condition(state.cur_set_score[winner], state.cur_set_score[loser], is_final_set) {
        state = player_wins_set(state, winner, loser, rules);
    }

    state.is_tiebreak =
        rules.is_tiebreak(state.cur_set_score[winner], state.cur_set_score[loser], is_final_set);

    state.reset_game_score();

    state
}

/// Record a set won by `winner`, ending the match if it is decided.
///
/// Once the match is over `set_num` stays on the deciding set and the set
/// score is left as the final record.
#[must_use]
pub fn player_wins_set<R: MatchRules + ?Sized>(
    mut state: MatchState,
    winner: &PlayerId,
    loser: &PlayerId,
    rules: &R,
) -> MatchState {
    state.sets_won[winner] += 1;

    let tiebreak_score = state.is_tiebreak.then(|| state.cur_game_score.clone());
    state.past_sets.push_back(CompletedSet {
        player_scores: state.cur_set_score.clone(),
        tiebreak_score,
    });

    log::trace!(
        "set {} to {} ({} sets to {})",
        state.set_num + 1,
        winner,
        state.sets_won[winner],
        state.sets_won[loser]
    );

    if rules.match_over(state.sets_won[winner], state.sets_won[loser]) {
        state.is_over = true;
    } else {
        state.set_num += 1;
        state.reset_set_score();
    }

    state
}
