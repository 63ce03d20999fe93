//! Resource categories and production numbers.
//!
//! Both are closed sets: a tile can only ever carry one of the six
//! categories, and a number token can only ever show one of the ten
//! valid totals (7 is the robber roll, never printed on a token).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Terrain category of a hex tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Wood,
    Brick,
    Wheat,
    Sheep,
    Ore,
    Desert,
}

impl ResourceType {
    /// All categories in their canonical order.
    pub const ALL: [ResourceType; 6] = [
        ResourceType::Wood,
        ResourceType::Brick,
        ResourceType::Wheat,
        ResourceType::Sheep,
        ResourceType::Ore,
        ResourceType::Desert,
    ];

    fn index(self) -> usize {
        match self {
            ResourceType::Wood => 0,
            ResourceType::Brick => 1,
            ResourceType::Wheat => 2,
            ResourceType::Sheep => 3,
            ResourceType::Ore => 4,
            ResourceType::Desert => 5,
        }
    }

    /// Lowercase display name used in recommendation texts.
    pub fn name(self) -> &'static str {
        match self {
            ResourceType::Wood => "wood",
            ResourceType::Brick => "brick",
            ResourceType::Wheat => "wheat",
            ResourceType::Sheep => "sheep",
            ResourceType::Ore => "ore",
            ResourceType::Desert => "desert",
        }
    }

    pub fn is_desert(self) -> bool {
        self == ResourceType::Desert
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value per resource category.
///
/// Every category is always present, so totals over the map are well
/// defined even for categories that never occur on the board.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ResourceMap<T> {
    values: [T; 6],
}

impl<T: Default> ResourceMap<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> ResourceMap<T> {
    /// Iterates `(category, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceType, &T)> {
        ResourceType::ALL.into_iter().zip(self.values.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T> Index<ResourceType> for ResourceMap<T> {
    type Output = T;

    fn index(&self, resource: ResourceType) -> &T {
        &self.values[resource.index()]
    }
}

impl<T> IndexMut<ResourceType> for ResourceMap<T> {
    fn index_mut(&mut self, resource: ResourceType) -> &mut T {
        &mut self.values[resource.index()]
    }
}

// Serialized as a JSON object keyed by category name.
impl<T: Serialize> Serialize for ResourceMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (resource, value) in self.iter() {
            map.serialize_entry(&resource, value)?;
        }
        map.end()
    }
}

/// The number printed on a tile's token.
///
/// Can only be constructed from {2, 3, 4, 5, 6, 8, 9, 10, 11, 12}.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ProductionNumber(u8);

impl ProductionNumber {
    /// Every value a number token can show.
    pub const VALID: [u8; 10] = [2, 3, 4, 5, 6, 8, 9, 10, 11, 12];

    pub fn new(value: u8) -> Option<Self> {
        if Self::VALID.contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Probability that two six-sided dice roll this total.
    pub fn probability(self) -> f64 {
        crate::analysis::dice::dice_probability(self.0)
    }

    /// Dots printed under the number (ways to roll it out of 36).
    pub fn pips(self) -> u8 {
        6 - (7i8 - self.0 as i8).unsigned_abs()
    }
}

impl TryFrom<u8> for ProductionNumber {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{} is not a valid production number", value))
    }
}

impl From<ProductionNumber> for u8 {
    fn from(number: ProductionNumber) -> u8 {
        number.0
    }
}

impl fmt::Display for ProductionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_number_rejects_seven() {
        assert!(ProductionNumber::new(7).is_none());
        assert!(ProductionNumber::new(1).is_none());
        assert!(ProductionNumber::new(13).is_none());
        assert_eq!(ProductionNumber::new(8).map(|n| n.value()), Some(8));
    }

    #[test]
    fn test_pips() {
        let pips: Vec<u8> = ProductionNumber::VALID
            .iter()
            .map(|&v| ProductionNumber::new(v).unwrap().pips())
            .collect();
        assert_eq!(pips, vec![1, 2, 3, 4, 5, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_production_number_serde() {
        let number: ProductionNumber = serde_json::from_str("6").unwrap();
        assert_eq!(number.value(), 6);
        assert_eq!(serde_json::to_string(&number).unwrap(), "6");
        assert!(serde_json::from_str::<ProductionNumber>("7").is_err());
    }

    #[test]
    fn test_resource_map_zero_filled() {
        let mut counts: ResourceMap<usize> = ResourceMap::new();
        counts[ResourceType::Ore] += 2;

        assert_eq!(counts[ResourceType::Ore], 2);
        assert_eq!(counts[ResourceType::Wood], 0);
        assert_eq!(counts.iter().count(), 6);
        assert_eq!(counts.values().sum::<usize>(), 2);
    }

    #[test]
    fn test_resource_map_serializes_by_name() {
        let mut map: ResourceMap<u32> = ResourceMap::new();
        map[ResourceType::Wheat] = 3;
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains("\"WHEAT\":3"));
        assert!(json.contains("\"DESERT\":0"));
    }
}
