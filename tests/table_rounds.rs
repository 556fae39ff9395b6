use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rummy_rs::table::{Table, TableConfig, TableError};
use std::collections::HashSet;

#[test]
fn round_deals_every_seat() {
    let mut t = Table::new(["Ana", "Bo", "Cy", "Di"]).unwrap();
    t.start_round_with(&mut ChaCha8Rng::seed_from_u64(1)).unwrap();
    assert_eq!(t.round(), 1);
    assert!(t.players().iter().all(|p| p.hand().len() == 10));
    assert_eq!(t.draw_pile().len(), 68);
    assert_eq!(t.total_cards(), 108);

    let ids: HashSet<String> = t
        .players()
        .iter()
        .flat_map(|p| p.hand().iter())
        .chain(t.draw_pile().iter())
        .map(|c| c.id())
        .collect();
    assert_eq!(ids.len(), 108);
}

#[test]
fn each_round_starts_from_a_full_deck() {
    let mut t = Table::new(["a", "b"]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    t.start_round_with(&mut rng).unwrap();
    for _ in 0..30 {
        t.draw();
    }
    assert_eq!(t.total_cards(), 108 - 30);
    t.start_round_with(&mut rng).unwrap();
    assert_eq!(t.round(), 2);
    assert_eq!(t.total_cards(), 108);
}

#[test]
fn draw_takes_the_top_of_the_pile() {
    let mut t = Table::new(["a", "b", "c"]).unwrap();
    t.start_round_with(&mut ChaCha8Rng::seed_from_u64(3)).unwrap();
    let top = t.draw_pile().as_slice()[0];
    assert_eq!(t.draw(), Some(top));
    assert_eq!(t.draw_pile().len(), 77);
}

#[test]
fn draw_on_empty_pile_is_none() {
    let mut t = Table::new(["solo"]).unwrap();
    assert_eq!(t.draw(), None);
}

#[test]
fn config_sets_seats_and_hand_size() {
    let cfg = TableConfig { players: 6, hand_size: 7, seed: Some(77) };
    let mut t = Table::from_config(&cfg).unwrap();
    t.start_round().unwrap();
    assert_eq!(t.players().len(), 6);
    assert!(t.players().iter().all(|p| p.hand().len() == 7));
    assert_eq!(t.draw_pile().len(), 108 - 42);
}

#[test]
fn ten_seats_with_ten_cards_fit_one_deck() {
    let cfg = TableConfig { players: 10, ..TableConfig::default() };
    let mut t = Table::from_config(&cfg).unwrap();
    t.start_round_with(&mut ChaCha8Rng::seed_from_u64(10)).unwrap();
    assert!(t.players().iter().all(|p| p.hand().len() == 10));
    assert_eq!(t.draw_pile().len(), 8);
}

#[test]
fn invalid_configs_are_rejected() {
    let cfg = TableConfig { players: 0, ..TableConfig::default() };
    assert!(matches!(Table::from_config(&cfg), Err(TableError::NoPlayers)));
    let names: Vec<String> = (0..11).map(|i| format!("n{i}")).collect();
    assert!(matches!(Table::new(names), Err(TableError::TooManyPlayers { .. })));
}
