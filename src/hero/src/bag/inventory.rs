// src/hero/src/bag/inventory.rs
use serde::{Deserialize, Serialize};

use items::Item;

/// Ordered list of carried items.
///
/// Duplicates are allowed; removal takes the first structural match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// 创建空库存
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the end.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first item equal to `item`. Absent items are a no-op.
    pub fn remove(&mut self, item: &Item) -> Option<Item> {
        let index = self.find(|candidate| candidate == item)?;
        Some(self.items.remove(index))
    }

    /// Replace the whole contents.
    pub fn replace<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Item>,
    {
        self.items = items.into_iter().collect();
    }

    /// 查找物品索引
    pub fn find<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&Item) -> bool,
    {
        self.items.iter().position(predicate)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Items worth more than the valuable threshold, in carry order.
    pub fn valuable_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_valuable())
    }

    /// Sum of all item values.
    pub fn total_value(&self) -> i64 {
        self.items.iter().map(|item| item.value).sum()
    }

    /// 当前物品数量
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
