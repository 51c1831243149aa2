use std::collections::HashMap;

use bigdecimal::BigDecimal;
use uuid::Uuid;

/// One ingredient reference of a recipe: which item, and how much of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub item_id: Uuid,
    pub amount: BigDecimal,
}

impl ItemLine {
    pub fn new(item_id: Uuid, amount: BigDecimal) -> Self {
        Self { item_id, amount }
    }
}

/// Changes that turn a recipe's stored item lines into the submitted ones.
///
/// `to_create` and `to_update` follow the order of the submitted list,
/// `to_delete` follows the order of the existing list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemListDiff {
    pub to_create: Vec<ItemLine>,
    pub to_update: Vec<ItemLine>,
    pub to_delete: Vec<ItemLine>,
}

impl ItemListDiff {
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_update.is_empty() && self.to_delete.is_empty()
    }
}

/// Computes the create/update/delete sets between two item lists keyed by item id.
///
/// Both inputs are expected to hold each item id at most once; callers reject
/// duplicates with [`duplicate_positions`] first. Lines present on both sides
/// with an equal amount are left out entirely.
pub fn diff_item_lines(existing: &[ItemLine], submitted: &[ItemLine]) -> ItemListDiff {
    let current: HashMap<Uuid, &BigDecimal> = existing
        .iter()
        .map(|line| (line.item_id, &line.amount))
        .collect();
    let wanted: HashMap<Uuid, &BigDecimal> = submitted
        .iter()
        .map(|line| (line.item_id, &line.amount))
        .collect();

    let mut diff = ItemListDiff::default();

    for line in submitted {
        match current.get(&line.item_id) {
            None => diff.to_create.push(line.clone()),
            Some(amount) if *amount != &line.amount => diff.to_update.push(line.clone()),
            Some(_) => {}
        }
    }

    diff.to_delete = existing
        .iter()
        .filter(|line| !wanted.contains_key(&line.item_id))
        .cloned()
        .collect();

    diff
}

/// Positions of every line whose item id appears more than once, ascending.
pub fn duplicate_positions(lines: &[ItemLine]) -> Vec<usize> {
    let mut occurrences: HashMap<Uuid, usize> = HashMap::new();
    for line in lines {
        *occurrences.entry(line.item_id).or_default() += 1;
    }

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| occurrences.get(&line.item_id).copied().unwrap_or(0) > 1)
        .map(|(position, _)| position)
        .collect()
}
