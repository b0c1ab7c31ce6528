use std::sync::Arc;

use super::test_helpers::{answer, engine_with, messages, seat, EchoSpeech};
use super::{GameEngine, StepOutcome, SKIP_OPTION};
use crate::domain::request::HumanActionType;
use crate::domain::roles::{Alignment, RoleName};
use crate::domain::state::Phase;
use crate::domain::GameConfig;
use crate::speech::offline::OfflineSpeech;

fn echo() -> Arc<EchoSpeech> {
    Arc::new(EchoSpeech::default())
}

#[tokio::test]
async fn step_before_start_reports_not_started() {
    let mut engine = GameEngine::new(Arc::new(OfflineSpeech));
    assert_eq!(engine.step().await, StepOutcome::NotStarted);
    assert_eq!(engine.phase(), Phase::Idle);
    assert!(engine.snapshot().logs.is_empty());
}

#[tokio::test]
async fn ai_night_resolves_in_one_step() {
    let mut engine = GameEngine::new(Arc::new(OfflineSpeech));
    engine
        .start(GameConfig::default().with_seed(11))
        .expect("six players is a valid table");

    let snapshot = engine.progress().await;

    assert_eq!(snapshot.day, 1);
    assert!(snapshot.pending_request.is_none());
    assert!(matches!(snapshot.phase, Phase::DayDiscussion | Phase::GameOver));
    let hunts = snapshot
        .logs
        .iter()
        .filter(|e| e.message.contains("pack gathers"))
        .count();
    assert_eq!(hunts, 1);
}

#[tokio::test]
async fn night_actions_are_logged_privately() {
    let mut engine = GameEngine::new(Arc::new(OfflineSpeech));
    engine
        .start(GameConfig::default().with_seed(3))
        .expect("six players is a valid table");
    let snapshot = engine.progress().await;

    let secret_markers = ["pack gathers", "peers into", "healing potion", "secretly poisons"];
    for entry in &snapshot.logs {
        if secret_markers.iter().any(|m| entry.message.contains(m)) {
            assert!(entry.is_private(), "leaked: {}", entry.message);
        }
    }
    assert!(snapshot
        .logs
        .iter()
        .any(|e| e.message == "Night 1 falls over the village." && !e.is_private()));
}

#[tokio::test]
async fn human_werewolf_is_offered_only_non_wolves() {
    let mut engine = engine_with(
        echo(),
        vec![
            seat("1", RoleName::Werewolf, true),
            seat("2", RoleName::Werewolf, false),
            seat("3", RoleName::Seer, false),
            seat("4", RoleName::Witch, false),
            seat("5", RoleName::Villager, false),
            seat("6", RoleName::Villager, false),
        ],
    );

    let StepOutcome::Suspended(request) = engine.step().await else {
        panic!("expected the pack to wait on its human member");
    };
    assert_eq!(request.action_type, HumanActionType::WerewolfTarget);
    assert_eq!(request.player_id, "1");
    let ids: Vec<&str> = request.options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "4", "5", "6"]);

    // Still waiting; stepping again changes nothing.
    let logs_before = engine.snapshot().logs.len();
    assert!(matches!(engine.step().await, StepOutcome::Suspended(_)));
    assert_eq!(engine.snapshot().logs.len(), logs_before);
}

#[tokio::test]
async fn healed_target_still_dies_to_poison() {
    let mut engine = engine_with(
        echo(),
        vec![
            seat("1", RoleName::Werewolf, true),
            seat("2", RoleName::Witch, true),
            seat("3", RoleName::Villager, false),
            seat("4", RoleName::Villager, false),
            seat("5", RoleName::Villager, false),
        ],
    );

    engine.progress().await;
    answer(&mut engine, HumanActionType::WerewolfTarget, "3").await;
    answer(&mut engine, HumanActionType::WitchHeal, "3").await;
    let snapshot = answer(&mut engine, HumanActionType::WitchPoison, "3").await;

    assert_eq!(snapshot.phase, Phase::DayDiscussion);
    assert_eq!(snapshot.day, 1);
    let victim = snapshot.player("3").expect("seat 3");
    assert!(!victim.is_alive());
    let witch = snapshot.player("2").expect("seat 2");
    assert!(!witch.notes.heal_available());
    assert!(!witch.notes.poison_available());

    let deaths: Vec<&str> = messages(&snapshot)
        .into_iter()
        .filter(|m| m.contains("is eliminated"))
        .collect();
    assert_eq!(deaths, vec!["P3 (Villager) is eliminated by the witch's poison."]);
}

#[tokio::test]
async fn heal_saves_the_wolves_target() {
    let mut engine = engine_with(
        echo(),
        vec![
            seat("1", RoleName::Werewolf, true),
            seat("2", RoleName::Witch, true),
            seat("3", RoleName::Villager, false),
            seat("4", RoleName::Villager, false),
        ],
    );

    engine.progress().await;
    answer(&mut engine, HumanActionType::WerewolfTarget, "4").await;
    answer(&mut engine, HumanActionType::WitchHeal, "4").await;
    let snapshot = answer(&mut engine, HumanActionType::WitchPoison, SKIP_OPTION).await;

    assert!(snapshot.living().count() == 4);
    assert!(messages(&snapshot).contains(&"The night passes peacefully. Nobody died."));
    let witch = snapshot.player("2").expect("seat 2");
    assert!(!witch.notes.heal_available());
    assert!(witch.notes.poison_available());
}

#[tokio::test]
async fn witch_may_keep_both_potions() {
    let mut engine = engine_with(
        echo(),
        vec![
            seat("1", RoleName::Werewolf, false),
            seat("2", RoleName::Witch, true),
            seat("3", RoleName::Villager, false),
            seat("4", RoleName::Villager, false),
            seat("5", RoleName::Villager, false),
        ],
    );

    let snapshot = engine.progress().await;
    let heal = snapshot.pending_request.expect("heal prompt");
    assert_eq!(heal.action_type, HumanActionType::WitchHeal);
    assert_eq!(heal.options.len(), 2);
    assert_eq!(heal.options[1].id, SKIP_OPTION);

    answer(&mut engine, HumanActionType::WitchHeal, SKIP_OPTION).await;
    let poison = engine.pending_request().cloned().expect("poison prompt");
    assert_eq!(poison.options[0].id, SKIP_OPTION);
    assert!(poison.options.iter().all(|o| o.id != "2"));

    let snapshot = answer(&mut engine, HumanActionType::WitchPoison, SKIP_OPTION).await;
    let witch = snapshot.player("2").expect("seat 2");
    assert!(witch.notes.heal_available());
    assert!(witch.notes.poison_available());
    assert_eq!(snapshot.living().count(), 4);
    assert_eq!(snapshot.phase, Phase::DayDiscussion);
}

#[tokio::test]
async fn human_seer_learns_alignment() {
    let mut engine = engine_with(
        echo(),
        vec![
            seat("1", RoleName::Werewolf, false),
            seat("2", RoleName::Seer, true),
            seat("3", RoleName::Villager, false),
            seat("4", RoleName::Villager, false),
            seat("5", RoleName::Villager, false),
        ],
    );

    let snapshot = engine.progress().await;
    let request = snapshot.pending_request.expect("seer prompt");
    assert_eq!(request.action_type, HumanActionType::SeerCheck);
    assert!(request.options.iter().all(|o| o.id != "2"));

    let snapshot = answer(&mut engine, HumanActionType::SeerCheck, "1").await;
    let seer = snapshot.player("2").expect("seat 2");
    assert_eq!(seer.notes.seer_results().get("1"), Some(&Alignment::Werewolf));
    let vision = snapshot
        .logs
        .iter()
        .find(|e| e.message.contains("peers into"))
        .expect("vision logged");
    assert!(vision.is_private());
}

#[tokio::test]
async fn werewolves_can_win_at_dawn() {
    let mut engine = engine_with(
        echo(),
        vec![
            seat("1", RoleName::Werewolf, true),
            seat("2", RoleName::Villager, false),
            seat("3", RoleName::Villager, false),
        ],
    );

    engine.progress().await;
    let snapshot = answer(&mut engine, HumanActionType::WerewolfTarget, "2").await;

    assert_eq!(snapshot.phase, Phase::GameOver);
    assert_eq!(snapshot.winner, Some(Alignment::Werewolf));
    assert!(snapshot.is_over());

    let logs = snapshot.logs.len();
    assert_eq!(engine.step().await, StepOutcome::Terminal(Alignment::Werewolf));
    assert_eq!(engine.snapshot().logs.len(), logs);
}

#[tokio::test]
async fn start_discards_previous_game() {
    let mut engine = GameEngine::new(Arc::new(OfflineSpeech));
    engine.start(GameConfig::default().with_seed(5)).expect("valid table");
    engine.run_until_decision().await;

    let snapshot = engine
        .start(GameConfig::default().with_seed(5).with_players(8))
        .expect("valid table");
    assert_eq!(snapshot.phase, Phase::Night);
    assert_eq!(snapshot.day, 0);
    assert_eq!(snapshot.players.len(), 8);
    assert_eq!(snapshot.logs.len(), 1);
    assert!(snapshot.winner.is_none());
}
