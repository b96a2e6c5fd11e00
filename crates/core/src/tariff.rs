use serde::{Deserialize, Serialize};

/// One band of a block-rate schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffBlock {
    /// Consumption already covered by the lower blocks.
    pub start_kwh: f64,
    /// Most units this block bills.
    pub capacity_kwh: f64,
    pub rate_per_kwh: f64,
}

impl TariffBlock {
    pub const fn new(start_kwh: f64, capacity_kwh: f64, rate_per_kwh: f64) -> Self {
        Self {
            start_kwh,
            capacity_kwh,
            rate_per_kwh,
        }
    }

    /// Units of `consumption` that fall inside this block.
    pub fn units_in(&self, consumption: f64) -> f64 {
        (consumption - self.start_kwh).clamp(0.0, self.capacity_kwh)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockCharge {
    /// 1-based block number.
    pub block: usize,
    pub kwh: f64,
    pub rate_per_kwh: f64,
    pub charge: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tariff {
    pub blocks: &'static [TariffBlock],
}

const DOMESTIC_BLOCKS: [TariffBlock; 4] = [
    TariffBlock::new(0.0, 200.0, 0.218),
    TariffBlock::new(200.0, 100.0, 0.334),
    TariffBlock::new(300.0, 300.0, 0.516),
    TariffBlock::new(600.0, 300.0, 0.546),
];

/// The only schedule in use. Both the create and the edit path price through it.
pub const DOMESTIC_TARIFF: Tariff = Tariff {
    blocks: &DOMESTIC_BLOCKS,
};

impl Tariff {
    /// Sum of units times rate over every block, filled from the first block up.
    /// No rounding; callers format for display.
    pub fn charge(&self, consumption: f64) -> f64 {
        self.blocks
            .iter()
            .map(|block| block.units_in(consumption) * block.rate_per_kwh)
            .sum()
    }

    /// Per-block lines for `consumption`, skipping blocks it does not reach.
    pub fn breakdown(&self, consumption: f64) -> Vec<BlockCharge> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(index, block)| {
                let kwh = block.units_in(consumption);
                if kwh <= 0.0 {
                    return None;
                }
                Some(BlockCharge {
                    block: index + 1,
                    kwh,
                    rate_per_kwh: block.rate_per_kwh,
                    charge: kwh * block.rate_per_kwh,
                })
            })
            .collect()
    }
}

pub fn charge(consumption: f64) -> f64 {
    DOMESTIC_TARIFF.charge(consumption)
}
