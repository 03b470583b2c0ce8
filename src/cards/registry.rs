//! Card registry for definition lookup and authoring validation.
//!
//! The `CardRegistry` stores every card definition for a game, keyed by
//! name. Registration is where malformed cards are rejected; the cost
//! resolver trusts whatever the registry hands out.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardKind};
use crate::error::TradeError;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use wonders_trade::cards::{Card, CardRegistry, Resource};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::producer("Lumber Yard", Resource::material("wood"), 1)).unwrap();
///
/// let found = registry.get("Lumber Yard").unwrap();
/// assert_eq!(found.name(), "Lumber Yard");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of cards, validating each one.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, TradeError> {
        let mut registry = Self::new();
        for card in cards {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Parse a JSON array of cards.
    pub fn from_json(json: &str) -> Result<Self, TradeError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// Register a card definition.
    ///
    /// Rejects duplicate names, cards chained from themselves, production
    /// cards that yield nothing and commercial cards with no side.
    pub fn register(&mut self, card: Card) -> Result<(), TradeError> {
        let name = card.name();
        if self.cards.contains_key(name) {
            return Err(TradeError::DuplicateCard(name.to_string()));
        }
        if card.chained_from() == Some(name) {
            return Err(TradeError::SelfChain(name.to_string()));
        }
        match card.kind() {
            CardKind::Production { amount: 0, .. } => {
                return Err(TradeError::EmptyProduction(name.to_string()));
            }
            CardKind::Commercial { sides, .. } if sides.is_empty() => {
                return Err(TradeError::NoDiscountSide(name.to_string()));
            }
            _ => {}
        }

        tracing::trace!(card = name, "registered card");
        self.cards.insert(name.to_string(), card);
        Ok(())
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.cards.get(name)
    }

    /// Check if a card name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Cards that become free once `name` is built.
    pub fn chain_successors<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.values().filter(move |c| c.chained_from() == Some(name))
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Resource, ResourceCategory, SideSet};

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry.register(Card::basic("Baths")).unwrap();

        assert!(registry.get("Baths").is_some());
        assert!(registry.get("Temple").is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Baths"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = CardRegistry::new();
        registry.register(Card::basic("Baths")).unwrap();

        let err = registry.register(Card::basic("Baths")).unwrap_err();
        assert!(matches!(err, TradeError::DuplicateCard(name) if name == "Baths"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_self_chain_rejected() {
        let mut registry = CardRegistry::new();
        let err = registry
            .register(Card::basic("Statue").with_chain("Statue"))
            .unwrap_err();
        assert!(matches!(err, TradeError::SelfChain(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_production_rejected() {
        let mut registry = CardRegistry::new();
        let err = registry
            .register(Card::producer("Dry Well", Resource::material("stone"), 0))
            .unwrap_err();
        assert!(matches!(err, TradeError::EmptyProduction(_)));
    }

    #[test]
    fn test_sideless_commercial_rejected() {
        let mut registry = CardRegistry::new();
        let err = registry
            .register(Card::commercial("Nowhere Post", ResourceCategory::Material, SideSet::NONE))
            .unwrap_err();
        assert!(matches!(err, TradeError::NoDiscountSide(_)));
    }

    #[test]
    fn test_chain_successors() {
        let registry = CardRegistry::from_cards([
            Card::basic("Altar"),
            Card::basic("Temple").with_chain("Altar"),
            Card::basic("Pantheon").with_chain("Temple"),
        ])
        .unwrap();

        let successors: Vec<_> = registry.chain_successors("Altar").map(Card::name).collect();
        assert_eq!(successors, vec!["Temple"]);
        assert_eq!(registry.chain_successors("Pantheon").count(), 0);
    }

    #[test]
    fn test_find_with_predicate() {
        let registry = CardRegistry::from_cards([
            Card::producer("Lumber Yard", Resource::material("wood"), 1),
            Card::producer("Glassworks", Resource::goods("glass"), 1),
            Card::basic("Altar"),
        ])
        .unwrap();

        let producers: Vec<_> = registry.find(|c| !c.production().is_empty()).collect();
        assert_eq!(producers.len(), 2);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "name": "Lumber Yard",
              "kind": { "type": "production",
                        "resource": { "name": "wood", "category": "Material" },
                        "amount": 1 } },
            { "name": "West Trading Post",
              "kind": { "type": "commercial", "category": "Material",
                        "sides": { "left": true, "right": false } } },
            { "name": "Stockade",
              "required_resources": [ { "name": "wood", "category": "Material" } ] }
        ]"#;

        let registry = CardRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 3);

        let post = registry.get("West Trading Post").unwrap();
        assert!(post.has_discount_for(ResourceCategory::Material, crate::cards::Side::Left));
        assert_eq!(
            registry.get("Stockade").unwrap().required_resources(),
            &[Resource::material("wood")][..]
        );
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"[ { "name": "Loop", "chained_from": "Loop" } ]"#;
        assert!(matches!(CardRegistry::from_json(json), Err(TradeError::SelfChain(_))));
    }
}
