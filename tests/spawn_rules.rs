mod common;

use common::{MockCounts, MockEntity, MockPlayer, MockWorld, host};
use gatehouse::{
    BlockPos, BlockState, CheckSpawn, ConfigError, Diagnostic, EventResult, ItemStack, JoinWorld,
    Severity, SpawnRule,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn load(text: &str, counts: MockCounts) -> (Vec<SpawnRule>, Vec<Diagnostic>) {
    let mut sink: Vec<Diagnostic> = Vec::new();
    let rules = SpawnRule::load_all(text, &host(counts), &mut sink).unwrap();
    (rules, sink)
}

fn spawn_at<'a>(world: &'a MockWorld, entity: &'a MockEntity, y: f64) -> CheckSpawn<'a> {
    CheckSpawn {
        world,
        entity,
        x: 0.5,
        y,
        z: 0.5,
        nearest_player: None,
        from_spawner: false,
        spawned_by_rules: false,
    }
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

#[test]
fn deny_zombies_in_the_dark_underground() {
    let (rules, sink) = load(
        r#"[{"mob": "minecraft:zombie", "maxheight": 40, "maxlight": 7, "result": "deny"}]"#,
        MockCounts::default(),
    );
    assert!(sink.is_empty(), "{sink:?}");
    let rule = &rules[0];
    assert_eq!(rule.result(), Some(EventResult::Deny));

    let zombie = MockEntity::mob("minecraft:zombie", true);
    let cow = MockEntity::mob("minecraft:cow", false);
    let dark = MockWorld {
        light: 3,
        ..MockWorld::default()
    };
    let bright = MockWorld::default();

    assert!(rule.matches(&spawn_at(&dark, &zombie, 30.0), &mut rng()));
    assert!(!rule.matches(&spawn_at(&dark, &zombie, 41.0), &mut rng()));
    assert!(!rule.matches(&spawn_at(&bright, &zombie, 30.0), &mut rng()));
    assert!(!rule.matches(&spawn_at(&dark, &cow, 30.0), &mut rng()));
}

#[test]
fn max_count_boundary() {
    let text = r#"[{"maxcount": "10,minecraft:zombie", "result": "allow"}]"#;
    let zombie = MockEntity::mob("minecraft:zombie", true);
    let world = MockWorld::default();

    let (below, _) = load(text, MockCounts::default().with("minecraft:zombie", 9));
    assert!(below[0].matches(&spawn_at(&world, &zombie, 64.0), &mut rng()));

    let (at, _) = load(text, MockCounts::default().with("minecraft:zombie", 10));
    assert!(!at[0].matches(&spawn_at(&world, &zombie, 64.0), &mut rng()));
}

#[test]
fn min_count_is_inclusive() {
    let text = r#"[{"mincount": {"amount": 10, "mob": "minecraft:zombie"}}]"#;
    let cow = MockEntity::mob("minecraft:cow", false);
    let world = MockWorld::default();

    let (at, _) = load(text, MockCounts::default().with("minecraft:zombie", 10));
    assert!(at[0].matches(&spawn_at(&world, &cow, 64.0), &mut rng()));

    let (below, _) = load(text, MockCounts::default().with("minecraft:zombie", 9));
    assert!(!below[0].matches(&spawn_at(&world, &cow, 64.0), &mut rng()));
}

#[test]
fn counts_scale_with_players_and_chunks() {
    let zombie = MockEntity::mob("minecraft:zombie", true);
    let world = MockWorld::default();
    let counts = MockCounts {
        players: 2,
        chunks: 578,
        ..MockCounts::default()
    }
    .with("minecraft:zombie", 9);

    let (per_player, _) = load(
        r#"[{"maxcount": {"amount": 5, "perplayer": true}}]"#,
        counts.clone(),
    );
    assert!(per_player[0].matches(&spawn_at(&world, &zombie, 64.0), &mut rng()));

    let (per_chunk, _) = load(
        r#"[{"maxcount": {"amount": 4, "perchunk": true}}]"#,
        counts.clone().with("minecraft:zombie", 8),
    );
    assert!(!per_chunk[0].matches(&spawn_at(&world, &zombie, 64.0), &mut rng()));
}

#[test]
fn per_player_and_per_chunk_conflict() {
    let (rules, sink) = load(
        r#"[{"maxcount": {"amount": 5, "perplayer": true, "perchunk": true}, "hostile": true}]"#,
        MockCounts::default(),
    );
    assert_eq!(rules.len(), 1);
    assert_eq!(
        sink[0].error,
        ConfigError::InvalidCount("cannot combine 'perchunk' and 'perplayer'")
    );
    assert_eq!(rules[0].evaluator().keys().collect::<Vec<_>>(), vec!["hostile"]);
}

#[test]
fn unknown_identifiers_are_dropped_with_an_error() {
    let (rules, sink) = load(
        r#"[{
            "mob": ["minecraft:zombie", "minecraft:unknown_mob"],
            "block": "minecraft:unknown_block"
        }]"#,
        MockCounts::default(),
    );
    let errors: Vec<_> = sink.iter().map(|d| d.error.clone()).collect();
    assert!(errors.contains(&ConfigError::UnknownEntity("minecraft:unknown_mob".into())));
    assert!(errors.contains(&ConfigError::UnknownBlock("minecraft:unknown_block".into())));
    assert!(sink.iter().all(|d| d.severity == Severity::Error));

    let world = MockWorld::default();
    let zombie = MockEntity::mob("minecraft:zombie", true);
    assert_eq!(rules[0].evaluator().keys().collect::<Vec<_>>(), vec!["mob"]);
    assert!(rules[0].matches(&spawn_at(&world, &zombie, 64.0), &mut rng()));
}

#[test]
fn leftover_keywords_are_reported_once() {
    let (rules, sink) = load(
        r#"[{"mintme": 100, "hostile": true, "setxp": 4, "bogus": "x"}]"#,
        MockCounts::default(),
    );
    assert_eq!(rules.len(), 1);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].document, "spawn.json[0]");
    assert_eq!(
        sink[0].error.to_string(),
        "invalid keywords in spawn rule: bogus mintme setxp"
    );
}

#[test]
fn block_below_the_spawn_position() {
    let (rules, sink) = load(
        r#"[{"block": "minecraft:grass_block"}]"#,
        MockCounts::default(),
    );
    assert!(sink.is_empty(), "{sink:?}");
    let cow = MockEntity::mob("minecraft:cow", false);
    let mut world = MockWorld::default();
    world
        .blocks
        .insert(BlockPos::new(0, 63, 0), BlockState::new("minecraft:grass_block"));

    assert!(rules[0].matches(&spawn_at(&world, &cow, 64.0), &mut rng()));
    assert!(!rules[0].matches(&spawn_at(&world, &cow, 70.0), &mut rng()));

    let unloaded = MockWorld {
        loaded: false,
        ..world
    };
    assert!(!rules[0].matches(&spawn_at(&unloaded, &cow, 64.0), &mut rng()));
}

#[test]
fn spawner_only_applies_to_spawn_checks() {
    let (rules, _) = load(r#"[{"spawner": true}]"#, MockCounts::default());
    let world = MockWorld::default();
    let zombie = MockEntity::mob("minecraft:zombie", true);

    let mut check = spawn_at(&world, &zombie, 64.0);
    check.from_spawner = true;
    assert!(rules[0].matches(&check, &mut rng()));

    let join = JoinWorld {
        world: &world,
        entity: &zombie,
        pos: BlockPos::new(0, 64, 0),
        nearest_player: None,
        spawned_by_rules: false,
    };
    assert!(!rules[0].matches(&join, &mut rng()));
}

#[test]
fn join_rules_see_the_nearest_player() {
    let (rules, sink) = load(
        r#"[{"onjoin": true, "playerhelditem": "minecraft:torch", "result": "deny"}]"#,
        MockCounts::default(),
    );
    assert!(sink.is_empty(), "{sink:?}");
    assert!(rules[0].on_join());

    let world = MockWorld::default();
    let zombie = MockEntity::mob("minecraft:zombie", true);
    let player = MockPlayer::holding(ItemStack::new("minecraft:torch"));
    let join = JoinWorld {
        world: &world,
        entity: &zombie,
        pos: BlockPos::new(3, 70, -2),
        nearest_player: Some(&player),
        spawned_by_rules: false,
    };
    assert!(rules[0].matches(&join, &mut rng()));

    let alone = JoinWorld {
        nearest_player: None,
        ..join
    };
    assert!(!rules[0].matches(&alone, &mut rng()));
}

#[test]
fn match_report_names_the_failing_check() {
    let (rules, _) = load(
        r#"[{"mob": "minecraft:zombie", "minlight": 10}]"#,
        MockCounts::default(),
    );
    let world = MockWorld {
        light: 2,
        ..MockWorld::default()
    };
    let zombie = MockEntity::mob("minecraft:zombie", true);
    let report = rules[0].match_detailed(&spawn_at(&world, &zombie, 64.0), &mut rng());
    assert!(!report.matched());
    assert_eq!(report.failed_at(), Some("minlight"));
}

#[test]
fn not_a_list_is_a_load_error() {
    let mut sink: Vec<Diagnostic> = Vec::new();
    let text = r#"{"mob": "minecraft:zombie"}"#;
    let err = SpawnRule::load_all(text, &host(MockCounts::default()), &mut sink).unwrap_err();
    assert!(matches!(err, gatehouse::GatehouseError::NotAList));
}

#[test]
fn non_object_documents_are_skipped() {
    let (rules, sink) = load(r#"[3, {"hostile": true}]"#, MockCounts::default());
    assert_eq!(rules.len(), 1);
    assert_eq!(sink[0].error, ConfigError::NotAnObject);
    assert_eq!(sink[0].document, "spawn.json[0]");
}
