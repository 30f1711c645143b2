use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Result;
use crate::models::{MealCandidate, MealSlot};

/// Candidate meals grouped by slot.
///
/// Built once and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealCatalog {
    slots: BTreeMap<MealSlot, Vec<MealCandidate>>,
}

impl MealCatalog {
    pub fn new(slots: BTreeMap<MealSlot, Vec<MealCandidate>>) -> Self {
        Self { slots }
    }

    /// Every candidate for a slot, in catalog order. Empty if the slot is absent.
    pub fn pool(&self, slot: MealSlot) -> &[MealCandidate] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of candidates across all slots.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The built-in catalog (South Indian dishes plus simple natural options).
pub static STANDARD_CATALOG: LazyLock<MealCatalog> = LazyLock::new(|| {
    let mut slots = BTreeMap::new();
    slots.insert(
        MealSlot::Breakfast,
        vec![
            MealCandidate::new("Idli with Sambar & Coconut Chutney", 300, 10),
            MealCandidate::new("Masala Dosa with Coconut Chutney", 420, 8),
            MealCandidate::new("Pongal with Pepper & Ghee ", 380, 12),
            MealCandidate::new("Ragi Malt  with Jaggery", 320, 6),
            MealCandidate::new("Upma with Vegetables and Peanuts", 350, 10),
        ],
    );
    slots.insert(
        MealSlot::Lunch,
        vec![
            MealCandidate::new("Sambar Rice with Vegetables and Rasam", 600, 18),
            MealCandidate::new("Curd Rice with Cucumber and lemon pickle", 520, 12),
            MealCandidate::new("Millet Khichdi with Vegetables", 550, 16),
            MealCandidate::new("Grilled Fish  with Steamed Rice", 560, 42),
            MealCandidate::new("Egg Curry with Brown Rice", 580, 36),
        ],
    );
    slots.insert(
        MealSlot::Snack,
        vec![
            MealCandidate::new("Fresh Banana with Coconut Pieces", 120, 1),
            MealCandidate::new("Tender Coconut Water and Flesh", 110, 2),
            MealCandidate::new("Sprouted Moong Salad with Lemon", 160, 12),
            MealCandidate::new("Roasted Chickpeas", 150, 8),
            MealCandidate::new("Buttermilk  with Curry Leaves", 80, 3),
        ],
    );
    slots.insert(
        MealSlot::Dinner,
        vec![
            MealCandidate::new("Grilled Paneer Tikka with Mixed Vegetables", 480, 30),
            MealCandidate::new("Fish Curry with Rice", 520, 40),
            MealCandidate::new("Mixed Vegetable Pulav with Raita", 450, 12),
            MealCandidate::new("Masoor Dal with Millet Rotis", 420, 22),
            MealCandidate::new("Vegetable Kurma with Ragi Rotis", 400, 10),
        ],
    );
    MealCatalog::new(slots)
});

/// Load a catalog from a JSON object keyed by slot name.
///
/// ```json
/// { "breakfast": [{ "name": "Poha", "calories": 280, "protein": 6 }] }
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let content = fs::read_to_string(path)?;
    let slots: BTreeMap<MealSlot, Vec<MealCandidate>> = serde_json::from_str(&content)?;
    Ok(MealCatalog::new(slots))
}
