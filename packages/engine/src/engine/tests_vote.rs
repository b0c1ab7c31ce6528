use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use super::test_helpers::{
    answer, at_discussion, at_vote, messages, seat, EchoSpeech, FailingSpeech, SlowSpeech,
};
use super::GameEngine;
use crate::domain::player::PlayerState;
use crate::domain::request::{HumanActionSubmission, HumanActionType};
use crate::domain::roles::{Alignment, RoleName};
use crate::domain::state::{Phase, VoteContext};
use crate::domain::Language;
use crate::speech::fallback;

fn humans(roles: &[RoleName]) -> Vec<PlayerState> {
    roles
        .iter()
        .enumerate()
        .map(|(i, &role)| seat(&(i + 1).to_string(), role, true))
        .collect()
}

async fn vote_round(engine: &mut GameEngine, ballots: &[&str]) {
    engine.progress().await;
    for target in ballots {
        answer(engine, HumanActionType::DayVote, target).await;
    }
}

#[tokio::test]
async fn tie_banishes_nobody_and_night_follows() {
    let mut engine = at_vote(humans(&[
        RoleName::Werewolf,
        RoleName::Villager,
        RoleName::Villager,
        RoleName::Villager,
    ]));

    vote_round(&mut engine, &["2", "1", "2", "1"]).await;

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, Phase::Night);
    assert_eq!(snapshot.living().count(), 4);
    assert!(messages(&snapshot).contains(&"The vote is inconclusive. Nobody is banished today."));
}

#[tokio::test]
async fn plurality_banishes_the_leader() {
    let mut engine = at_vote(humans(&[
        RoleName::Werewolf,
        RoleName::Villager,
        RoleName::Villager,
        RoleName::Villager,
        RoleName::Villager,
    ]));

    vote_round(&mut engine, &["2", "3", "2", "2", "1"]).await;

    let snapshot = engine.snapshot();
    assert!(!snapshot.player("2").expect("seat 2").is_alive());
    assert_eq!(snapshot.living().count(), 4);
    assert_eq!(snapshot.phase, Phase::Night);
    let log = messages(&snapshot);
    assert!(log.contains(&"P2 is banished with 3 votes."));
    assert!(log.contains(&"P2 (Villager) is eliminated by the day vote."));
    assert_eq!(log.last(), Some(&"Night falls once more."));
}

#[tokio::test]
async fn banishing_the_last_wolf_ends_the_game() {
    let mut engine = at_vote(humans(&[
        RoleName::Werewolf,
        RoleName::Villager,
        RoleName::Villager,
        RoleName::Villager,
    ]));

    vote_round(&mut engine, &["2", "1", "1", "1"]).await;

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, Phase::GameOver);
    assert_eq!(snapshot.winner, Some(Alignment::Good));
    assert!(snapshot.pending_request.is_none());
}

#[tokio::test]
async fn no_ballots_banishes_nobody() {
    let mut engine = at_vote(humans(&[RoleName::Werewolf, RoleName::Villager, RoleName::Villager]));
    engine.vote = Some(VoteContext {
        voters: Vec::new(),
        index: 0,
        votes: BTreeMap::new(),
    });

    let snapshot = engine.progress().await;
    assert_eq!(snapshot.phase, Phase::Night);
    assert_eq!(snapshot.living().count(), 3);
}

#[tokio::test]
async fn each_vote_is_logged_publicly() {
    let mut engine = at_vote(humans(&[RoleName::Werewolf, RoleName::Villager, RoleName::Villager]));
    engine.progress().await;
    let snapshot = answer(&mut engine, HumanActionType::DayVote, "3").await;

    let entry = snapshot
        .logs
        .iter()
        .find(|e| e.message == "P1 votes for P3.")
        .expect("ballot logged");
    assert!(!entry.is_private());
    assert_eq!(snapshot.pending_request.expect("next voter").player_id, "2");
}

#[tokio::test]
async fn invalid_submissions_leave_the_request_pending() {
    let mut engine = at_vote(humans(&[RoleName::Werewolf, RoleName::Villager, RoleName::Villager]));
    let snapshot = engine.progress().await;
    let request = snapshot.pending_request.expect("voter prompt");
    let logs = snapshot.logs.len();

    let attempts = [
        HumanActionSubmission::choose("req-999", "2"),
        HumanActionSubmission::choose(request.request_id.clone(), "1"),
        HumanActionSubmission::choose(request.request_id.clone(), "nobody"),
        HumanActionSubmission::speak(request.request_id.clone(), "vote P2"),
    ];
    for attempt in attempts {
        let after = engine.submit_human_action(attempt).await;
        assert_eq!(after.pending_request.as_ref(), Some(&request));
        assert_eq!(after.logs.len(), logs);
    }
}

#[tokio::test]
async fn ai_werewolf_votes_for_good_player_with_reasoning() {
    let mut engine = at_vote(vec![
        seat("1", RoleName::Werewolf, false),
        seat("2", RoleName::Werewolf, true),
        seat("3", RoleName::Villager, true),
        seat("4", RoleName::Villager, true),
        seat("5", RoleName::Villager, true),
    ]);

    let snapshot = engine.progress().await;
    let log = messages(&snapshot);
    assert_eq!(log[log.len() - 2..], ["P1 votes for P3.", "P1: P1 speaks."]);
    assert!(snapshot.pending_request.is_none());

    let snapshot = engine.progress().await;
    assert_eq!(snapshot.pending_request.expect("next voter").player_id, "2");
}

#[tokio::test]
async fn discussion_gives_each_listed_speaker_a_turn() {
    let speech = Arc::new(EchoSpeech::default());
    let mut engine = at_discussion(
        speech.clone(),
        vec![
            seat("1", RoleName::Werewolf, false),
            seat("2", RoleName::Villager, false),
            seat("3", RoleName::Villager, false),
            seat("4", RoleName::Seer, false),
        ],
    );
    // Fell after the list was drawn up; still gets the floor.
    engine.players[0].kill();

    for _ in 0..4 {
        engine.progress().await;
    }
    let snapshot = engine.progress().await;

    let log = messages(&snapshot);
    for id in 1..=4 {
        let line = format!("P{id}: P{id} speaks.");
        assert!(log.contains(&line.as_str()), "missing {line}");
    }
    assert_eq!(snapshot.phase, Phase::DayVote);
    assert_eq!(log.last(), Some(&"Discussion is over. Time to vote on who to banish."));
}

#[tokio::test]
async fn speakers_never_see_private_logs() {
    let speech = Arc::new(EchoSpeech::default());
    let mut engine = at_discussion(
        speech.clone(),
        vec![
            seat("1", RoleName::Villager, false),
            seat("2", RoleName::Werewolf, false),
            seat("3", RoleName::Villager, false),
        ],
    );
    engine.log_private("P2 marks P3 for tonight's attack.");
    engine.progress().await;

    let seen = speech.seen.lock().expect("lock");
    let ctx = seen.first().expect("speaker consulted");
    assert_eq!(ctx.speaker.id, "1");
    assert!(ctx.recent_logs.iter().all(|e| !e.is_private()));
    assert!(ctx.recent_logs.iter().all(|e| !e.message.contains("marks")));
    assert!(ctx
        .alive_players
        .iter()
        .all(|p| p.alignment.is_none() || p.id == "1"));
}

#[tokio::test]
async fn human_speech_is_logged_trimmed() {
    let mut engine = at_discussion(
        Arc::new(EchoSpeech::default()),
        vec![
            seat("1", RoleName::Villager, true),
            seat("2", RoleName::Werewolf, false),
            seat("3", RoleName::Villager, false),
        ],
    );
    let snapshot = engine.progress().await;
    let request = snapshot.pending_request.expect("speech prompt");
    assert_eq!(request.action_type, HumanActionType::DaySpeech);
    assert!(request.text_input.is_some());

    let ignored = engine
        .submit_human_action(HumanActionSubmission::choose(request.request_id.clone(), "2"))
        .await;
    assert!(ignored.pending_request.is_some());

    let snapshot = engine
        .submit_human_action(HumanActionSubmission::speak(request.request_id, "  I trust P3.  "))
        .await;
    assert!(messages(&snapshot).contains(&"P1: I trust P3."));
}

#[tokio::test]
async fn blank_human_speech_is_silence() {
    let mut engine = at_discussion(
        Arc::new(EchoSpeech::default()),
        vec![
            seat("1", RoleName::Villager, true),
            seat("2", RoleName::Werewolf, false),
            seat("3", RoleName::Villager, false),
        ],
    );
    let request = engine.progress().await.pending_request.expect("speech prompt");
    let snapshot = engine
        .submit_human_action(HumanActionSubmission::speak(request.request_id, "   "))
        .await;
    assert!(messages(&snapshot).contains(&"P1 stays silent."));
}

#[tokio::test]
async fn failing_provider_falls_back_to_canned_line() {
    let mut engine = at_discussion(
        Arc::new(FailingSpeech),
        vec![
            seat("1", RoleName::Seer, false),
            seat("2", RoleName::Werewolf, false),
            seat("3", RoleName::Villager, false),
        ],
    );
    let snapshot = engine.progress().await;

    let last = snapshot.logs.last().expect("speech logged");
    let line = last.message.strip_prefix("P1: ").expect("speaker prefix");
    assert!(fallback::lines(RoleName::Seer, Language::En).contains(&line));
}

#[tokio::test]
async fn slow_provider_times_out_to_canned_line() {
    let mut engine = at_discussion(
        Arc::new(SlowSpeech(Duration::from_secs(5))),
        vec![
            seat("1", RoleName::Villager, false),
            seat("2", RoleName::Werewolf, false),
            seat("3", RoleName::Villager, false),
        ],
    );
    let snapshot = engine.progress().await;

    let last = snapshot.logs.last().expect("speech logged");
    assert!(!last.message.contains("too late"));
    let line = last.message.strip_prefix("P1: ").expect("speaker prefix");
    assert!(fallback::lines(RoleName::Villager, Language::En).contains(&line));
}
