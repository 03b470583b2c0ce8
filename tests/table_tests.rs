//! Table tests.
//!
//! These tests seat several players in a ring and verify that builds are
//! resolved against the correct neighbors and committed only on success.

use wonders_trade::cards::{Card, CardRegistry, Resource, Side};
use wonders_trade::core::{SeatId, TradeRules};
use wonders_trade::error::TradeError;
use wonders_trade::players::{Civilization, Player, Table};

const CARDS_JSON: &str = r#"[
    { "name": "Lumber Yard",
      "kind": { "type": "production",
                "resource": { "name": "wood", "category": "Material" }, "amount": 1 } },
    { "name": "Ore Vein",
      "kind": { "type": "production",
                "resource": { "name": "ore", "category": "Material" }, "amount": 1 } },
    { "name": "West Trading Post",
      "kind": { "type": "commercial", "category": "Material",
                "sides": { "left": true, "right": false } } },
    { "name": "Stockade",
      "required_resources": [ { "name": "wood", "category": "Material" } ] },
    { "name": "Walls",
      "required_resources": [ { "name": "ore", "category": "Material" },
                              { "name": "ore", "category": "Material" },
                              { "name": "ore", "category": "Material" } ] },
    { "name": "Fortifications",
      "required_resources": [ { "name": "ore", "category": "Material" },
                              { "name": "ore", "category": "Material" },
                              { "name": "ore", "category": "Material" },
                              { "name": "ore", "category": "Material" } ],
      "chained_from": "Walls" }
]"#;

fn registry() -> CardRegistry {
    CardRegistry::from_json(CARDS_JSON).expect("fixture cards are valid")
}

fn card(registry: &CardRegistry, name: &str) -> Card {
    registry.get(name).cloned().expect("card is registered")
}

/// Four seats: wood, ore, ore, ore.
fn four_seat_table(rules: TradeRules) -> Table {
    let players = vec![
        Player::new(Civilization::new("Rhodos", Resource::material("wood"))),
        Player::new(Civilization::new("Alexandria", Resource::material("ore"))),
        Player::new(Civilization::new("Ephesos", Resource::material("ore"))),
        Player::new(Civilization::new("Olympia", Resource::material("ore"))),
    ];
    Table::new(players, rules).expect("four seats")
}

/// Seat 0 buys ore from seat 3 (left) and seat 1 (right), never seat 2.
#[test]
fn test_only_adjacent_seats_trade() {
    let registry = registry();
    let table = four_seat_table(TradeRules::default());
    let walls = card(&registry, "Walls");

    // Left and right hold one ore each; the third is out of reach.
    assert_eq!(table.build_cost(SeatId::new(0), &walls).unwrap(), None);

    // Seat 2 has its own ore plus both neighbors.
    assert_eq!(table.build_cost(SeatId::new(2), &walls).unwrap(), Some(0));
}

/// A commercial card prices trades with the left seat only.
#[test]
fn test_commercial_card_at_the_table() {
    let registry = registry();
    let mut table = four_seat_table(TradeRules::default());
    let seat = SeatId::new(2);

    table.try_build(seat, card(&registry, "West Trading Post")).unwrap();
    let quote = table.quote(seat, &card(&registry, "Walls")).unwrap().unwrap();

    assert_eq!(quote.paid_to(Side::Left), 1);
    assert_eq!(quote.paid_to(Side::Right), 0);
    assert_eq!(quote.total_cost(), 1);
}

/// Built production at a neighbor becomes available to buy.
#[test]
fn test_neighbor_production_grows_with_builds() {
    let registry = registry();
    let mut table = four_seat_table(TradeRules::default());
    let walls = card(&registry, "Walls");

    table.try_build(SeatId::new(1), card(&registry, "Ore Vein")).unwrap();
    assert_eq!(table.build_cost(SeatId::new(0), &walls).unwrap(), Some(0));
}

/// Chains carry through the table: Walls then Fortifications for free.
#[test]
fn test_chain_through_table() {
    let registry = registry();
    let mut table = four_seat_table(TradeRules::default());
    let seat = SeatId::new(2);

    table.try_build(seat, card(&registry, "Walls")).unwrap();

    let fortifications = card(&registry, "Fortifications");
    let quote = table.try_build(seat, fortifications).unwrap();
    assert!(quote.is_chained());

    let built: Vec<_> = table
        .player(seat)
        .unwrap()
        .built_cards()
        .iter()
        .map(Card::name)
        .collect();
    assert_eq!(built, vec!["Walls", "Fortifications"]);
}

/// Unbuildable cards are reported and nothing is committed.
#[test]
fn test_unbuildable_is_not_committed() {
    let registry = registry();
    let mut table = four_seat_table(TradeRules::default());

    let err = table
        .try_build(SeatId::new(0), card(&registry, "Fortifications"))
        .unwrap_err();
    assert!(matches!(err, TradeError::Unbuildable { seat, .. } if seat == SeatId::new(0)));
    assert!(table.player(SeatId::new(0)).unwrap().built_cards().is_empty());
}

/// Custom prices flow from the rules to every quote.
#[test]
fn test_rules_loaded_from_json() {
    let rules = TradeRules::from_json(r#"{ "neighbor_price": 2 }"#).unwrap();
    let registry = registry();
    let table = four_seat_table(rules);

    assert_eq!(table.rules().neighbor_price, 2);
    let walls = card(&registry, "Walls");
    // Seat 2: own ore free, one ore from each neighbor at 2.
    assert_eq!(table.build_cost(SeatId::new(2), &walls).unwrap(), Some(4));
}

/// Two seats: each player's single neighbor sits on both sides.
#[test]
fn test_two_seat_table() {
    let players = vec![
        Player::new(Civilization::new("Rhodos", Resource::material("wood"))),
        Player::new(Civilization::new("Giza", Resource::material("stone"))),
    ];
    let table = Table::new(players, TradeRules::default()).unwrap();
    let card = Card::basic("Quarry Wall").with_requirements([
        Resource::material("stone"),
        Resource::material("stone"),
    ]);

    assert_eq!(table.left_of(SeatId::new(0)), table.right_of(SeatId::new(0)));
    // Both neighbor pools are snapshots of the same player.
    assert_eq!(table.build_cost(SeatId::new(0), &card).unwrap(), Some(0));
}
