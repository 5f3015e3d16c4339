use crate::world::block::Block;

pub const INVENTORY_SLOTS: usize = 36;
pub const MAX_STACK: u16 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStack {
    pub block: Block,
    pub count: u16,
}

/// Fixed slots of block stacks carried by a player.
#[derive(Debug, Clone)]
pub struct Inventory {
    slots: [Option<ItemStack>; INVENTORY_SLOTS],
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            slots: [None; INVENTORY_SLOTS],
        }
    }

    pub fn slot(&self, index: usize) -> Option<ItemStack> {
        self.slots.get(index).copied().flatten()
    }

    /// Add `count` blocks, topping up existing stacks before opening new
    /// slots. Returns how many did not fit.
    pub fn add(&mut self, block: Block, mut count: u16) -> u16 {
        for stack in self.slots.iter_mut().flatten() {
            if count == 0 {
                return 0;
            }
            if stack.block == block && stack.count < MAX_STACK {
                let moved = count.min(MAX_STACK - stack.count);
                stack.count += moved;
                count -= moved;
            }
        }
        for slot in self.slots.iter_mut().filter(|slot| slot.is_none()) {
            if count == 0 {
                break;
            }
            let moved = count.min(MAX_STACK);
            *slot = Some(ItemStack { block, count: moved });
            count -= moved;
        }
        count
    }

    /// Take up to `count` blocks from anywhere in the inventory. Returns how
    /// many were taken.
    pub fn take(&mut self, block: Block, count: u16) -> u16 {
        let mut taken = 0;
        for slot in self.slots.iter_mut() {
            if taken == count {
                break;
            }
            if let Some(stack) = slot {
                if stack.block != block {
                    continue;
                }
                let moved = (count - taken).min(stack.count);
                stack.count -= moved;
                taken += moved;
                if stack.count == 0 {
                    *slot = None;
                }
            }
        }
        taken
    }

    pub fn count(&self, block: Block) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|stack| stack.block == block)
            .map(|stack| u32::from(stack.count))
            .sum()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
