use std::sync::Arc;

use fight_core::{AgentState, DecisionPath, FightAction, FightEngine, GameView, PopulationBaseline};
use fight_runtime::{
    DecisionSource, EngineFightProvider, FightProvider, RandomFightProvider, RuntimeConfig,
    UniformFightProvider,
};

fn roster(level: u32, monster_health: u32, monster_attack: u32, agents: usize) -> Arc<GameView> {
    let view = (0..agents).fold(
        GameView::new(level, monster_health, monster_attack),
        |view, i| view.with_agent(format!("agent-{i:03}"), AgentState::new(20 + i as u32, 2, 1)),
    );
    Arc::new(view)
}

#[tokio::test]
async fn providers_are_interchangeable() {
    let providers: Vec<Box<dyn FightProvider>> = vec![
        Box::new(EngineFightProvider::new(FightEngine::default())),
        Box::new(RandomFightProvider::seeded(3)),
        Box::new(UniformFightProvider::new(FightAction::Defend)),
    ];
    let view = roster(1, 15, 40, 6);

    for provider in &providers {
        let decision = provider.provide_fight(Arc::clone(&view)).await.unwrap();
        assert_eq!(decision.actions.len(), 6);
    }
}

#[tokio::test]
async fn shared_engine_keeps_one_baseline_across_rounds() {
    let config = RuntimeConfig::default();
    let engine = config.build_engine().unwrap();
    let provider = EngineFightProvider::new(engine);

    // Round 1: twelve agents overwhelm a weak monster.
    let first = provider.provide_fight(roster(1, 10, 5, 12)).await.unwrap();
    assert_eq!(first.source, DecisionSource::Engine(DecisionPath::AllAttack));

    // Later rounds see fewer agents; the baseline stays at twelve.
    let clone = provider.clone();
    clone.provide_fight(roster(2, 10, 5, 4)).await.unwrap();
    assert_eq!(provider.engine().baseline().get(), Some(12));
    assert_eq!(provider.metrics().total(), 2);
}

#[tokio::test]
async fn concurrent_rounds_agree_on_baseline() {
    let provider = EngineFightProvider::new(FightEngine::default());

    let mut tasks = Vec::new();
    for agents in 1..=8 {
        let provider = provider.clone();
        tasks.push(tokio::spawn(async move {
            provider.provide_fight(roster(1, 500, 30, agents)).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let baseline = provider.engine().baseline().get().unwrap();
    assert!((1..=8).contains(&baseline));
    assert_eq!(provider.metrics().total(), 8);
}

#[tokio::test]
async fn depleted_population_changes_policy() {
    let engine = FightEngine::default().with_baseline(PopulationBaseline::with_initial(100));
    let provider = EngineFightProvider::new(engine);

    let view = Arc::new(
        GameView::new(1, 30, 12)
            .with_agent("a", AgentState::new(100, 2, 0))
            .with_agent("b", AgentState::new(90, 2, 0))
            .with_agent("c", AgentState::new(4, 20, 5)),
    );
    let decision = provider.provide_fight(view).await.unwrap();

    match decision.source {
        DecisionSource::Engine(DecisionPath::Simulated { deaths, .. }) => assert_eq!(deaths, 0),
        other => panic!("expected a simulated decision, got {other:?}"),
    }
}
