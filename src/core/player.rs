//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Opaque player identity. A match has exactly two, fixed for its lifetime.
//! Backed by `Arc<str>` so snapshots clone identities without allocating.
//!
//! ## PlayerMap
//!
//! Per-player data storage with exactly two entries keyed by `PlayerId`.
//! Looking up a player the map was not built for is an invariant violation
//! and panics.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::sync::Arc;

/// Opaque player identity.
///
/// Equality is by name. Clones are cheap (reference counted).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(Arc<str>);

impl PlayerId {
    /// Create a new player identity.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PlayerId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

/// Two-player data storage keyed by identity.
///
/// Entry order is the order the map was built in. Scores are rebuilt in
/// `(server, returner)` order whenever a game or set resets, so iteration
/// order carries no meaning beyond that.
///
/// ## Example
///
/// ```
/// use tennis_points::core::{PlayerId, PlayerMap};
///
/// let a = PlayerId::new("A");
/// let b = PlayerId::new("B");
///
/// let mut games: PlayerMap<u32> = PlayerMap::with_value(a.clone(), b.clone(), 0);
/// games[&a] += 1;
///
/// assert_eq!(games[&a], 1);
/// assert_eq!(games[&b], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    entries: [(PlayerId, T); 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(first: PlayerId, second: PlayerId, factory: impl Fn(&PlayerId) -> T) -> Self {
        assert_ne!(first, second, "Players must be distinct");

        let first_value = factory(&first);
        let second_value = factory(&second);

        Self {
            entries: [(first, first_value), (second, second_value)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(first: PlayerId, second: PlayerId, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(first, second, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(first: PlayerId, second: PlayerId) -> Self
    where
        T: Default,
    {
        Self::new(first, second, |_| T::default())
    }

    fn position(&self, player: &PlayerId) -> Option<usize> {
        self.entries.iter().position(|(id, _)| id == player)
    }

    /// Check whether the map has an entry for a player.
    #[must_use]
    pub fn contains(&self, player: &PlayerId) -> bool {
        self.position(player).is_some()
    }

    /// Check whether the map is keyed by exactly these two players.
    #[must_use]
    pub fn is_keyed_by(&self, a: &PlayerId, b: &PlayerId) -> bool {
        a != b && self.contains(a) && self.contains(b)
    }

    /// Get a player's value, or `None` if the player is not in this map.
    #[must_use]
    pub fn try_get(&self, player: &PlayerId) -> Option<&T> {
        self.position(player).map(|i| &self.entries[i].1)
    }

    /// Get a reference to a player's data.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not one of the two keys.
    #[must_use]
    pub fn get(&self, player: &PlayerId) -> &T {
        match self.position(player) {
            Some(i) => &self.entries[i].1,
            None => panic!("Unknown player: {}", player),
        }
    }

    /// Get a mutable reference to a player's data.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not one of the two keys.
    pub fn get_mut(&mut self, player: &PlayerId) -> &mut T {
        match self.position(player) {
            Some(i) => &mut self.entries[i].1,
            None => panic!("Unknown player: {}", player),
        }
    }

    /// Iterate over (PlayerId, &T) pairs in entry order.
    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &T)> {
        self.entries.iter().map(|(id, v)| (id, v))
    }

    /// Iterate over both player IDs in entry order.
    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.entries.iter().map(|(id, _)| id)
    }

    /// Iterate over both values in entry order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Both entries, in entry order.
    #[must_use]
    pub fn pair(&self) -> [(&PlayerId, &T); 2] {
        let [(a, x), (b, y)] = &self.entries;
        [(a, x), (b, y)]
    }
}

impl<T> Index<&PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: &PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<&PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: &PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> (PlayerId, PlayerId) {
        (PlayerId::new("Roger Federer"), PlayerId::new("Rafael Nadal"))
    }

    #[test]
    fn test_player_id_basics() {
        let p = PlayerId::new("Roger Federer");

        assert_eq!(p.as_str(), "Roger Federer");
        assert_eq!(format!("{}", p), "Roger Federer");
        assert_eq!(p, PlayerId::from("Roger Federer"));
        assert_eq!(p, PlayerId::from(String::from("Roger Federer")));
    }

    #[test]
    fn test_player_map_new() {
        let (a, b) = players();
        let map: PlayerMap<usize> = PlayerMap::new(a.clone(), b.clone(), |p| p.as_str().len());

        assert_eq!(map[&a], 13);
        assert_eq!(map[&b], 12);
    }

    #[test]
    fn test_player_map_with_default() {
        let (a, b) = players();
        let map: PlayerMap<u32> = PlayerMap::with_default(a.clone(), b.clone());

        assert_eq!(map[&a], 0);
        assert_eq!(map[&b], 0);
    }

    #[test]
    fn test_player_map_mutation() {
        let (a, b) = players();
        let mut map: PlayerMap<u32> = PlayerMap::with_value(a.clone(), b.clone(), 0);

        map[&a] += 3;
        *map.get_mut(&b) = 5;

        assert_eq!(map[&a], 3);
        assert_eq!(map[&b], 5);
    }

    #[test]
    fn test_player_map_iter_order() {
        let (a, b) = players();
        let map: PlayerMap<u32> = PlayerMap::with_value(b.clone(), a.clone(), 1);

        let ids: Vec<_> = map.player_ids().cloned().collect();
        assert_eq!(ids, vec![b.clone(), a.clone()]);
        assert_eq!(map.values().sum::<u32>(), 2);
    }

    #[test]
    fn test_player_map_keys() {
        let (a, b) = players();
        let map: PlayerMap<u32> = PlayerMap::with_default(a.clone(), b.clone());

        assert!(map.is_keyed_by(&a, &b));
        assert!(map.is_keyed_by(&b, &a));
        assert!(!map.is_keyed_by(&a, &a));
        assert!(map.try_get(&PlayerId::new("Novak Djokovic")).is_none());
    }

    #[test]
    fn test_player_map_serialization() {
        let (a, b) = players();
        let map: PlayerMap<u32> = PlayerMap::new(a, b, |p| p.as_str().len() as u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Players must be distinct")]
    fn test_player_map_same_player() {
        let a = PlayerId::new("A");
        let _: PlayerMap<u32> = PlayerMap::with_default(a.clone(), a);
    }

    #[test]
    #[should_panic(expected = "Unknown player")]
    fn test_player_map_unknown_player() {
        let (a, b) = players();
        let map: PlayerMap<u32> = PlayerMap::with_default(a, b);
        let _ = map[&PlayerId::new("Novak Djokovic")];
    }
}
