//! Synthetic price mutation.
//!
//! Each tick moves a record's primary value (price, index level or rate) by a
//! uniform random amount in `[-value * volatility / 2, +value * volatility / 2)`.
//! The running `change` accumulates the same amount and `changePercent` is
//! recomputed relative to the previous value as `change / (value - change) * 100`.
//!
//! Mutation never edits a record in place: every call returns a fresh copy with
//! `lastUpdated` set to the supplied instant. Randomness comes in through an
//! injected [`Rng`] (or a raw draw), so a seeded generator reproduces a run.

use chrono::{DateTime, Utc};
use market_common::model::{AssetRecord, CryptoAsset, CurrencyPair, Equity, MarketIndex};
use rand::Rng;

/// Random-walk settings of equities.
pub const EQUITY_WALK: WalkParams = WalkParams::new(0.01, 0.01, 2);
/// Random-walk settings of market indices.
pub const INDEX_WALK: WalkParams = WalkParams::new(0.0015, 0.01, 2);
/// Random-walk settings of currency pairs.
pub const CURRENCY_WALK: WalkParams = WalkParams::new(0.0008, 0.0001, 4);
/// Volatility of the two largest crypto assets.
pub const MAJOR_CRYPTO_VOLATILITY: f64 = 0.005;
/// Volatility of every other crypto asset.
pub const MINOR_CRYPTO_VOLATILITY: f64 = 0.012;
/// Smallest crypto price the walk may reach.
pub const CRYPTO_FLOOR: f64 = 0.000001;

const MAJOR_CRYPTOS: [&str; 2] = ["BTC", "ETH"];
const PERCENT_DECIMALS: u32 = 2;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Parameters of one asset class's random walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    /// Full width of the perturbation range as a fraction of the current value.
    pub volatility: f64,
    /// Strictly positive lower bound of the primary value.
    pub floor: f64,
    /// Decimal places kept for the primary value and the running change.
    pub decimals: u32,
}

/// Result of perturbing one primary value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    /// New primary value, rounded and floored.
    pub value: f64,
    /// New running change, rounded.
    pub change: f64,
    /// New change percent, rounded to two places.
    pub change_percent: f64,
}

impl WalkParams {
    /// Build walk parameters.
    pub const fn new(volatility: f64, floor: f64, decimals: u32) -> Self {
        Self {
            volatility,
            floor,
            decimals,
        }
    }

    /// Apply one step given a uniform `draw` in `[0, 1)`.
    ///
    /// `changePercent` is derived from the unrounded value and change. When the
    /// new value equals the new change the divisor is zero and the percent is
    /// non-finite; that edge is kept as is.
    pub fn perturb(&self, value: f64, change: f64, draw: f64) -> Perturbation {
        let delta = (draw - 0.5) * (value * self.volatility);
        let new_value = (value + delta).max(self.floor);
        let new_change = change + delta;
        let new_change_percent = new_change / (new_value - new_change) * 100.0;

        Perturbation {
            // rounding must not undo the floor
            value: round_to(new_value, self.decimals).max(self.floor),
            change: round_to(new_change, self.decimals),
            change_percent: round_to(new_change_percent, PERCENT_DECIMALS),
        }
    }
}

/// A record whose primary value follows the synthetic random walk.
pub trait Mutable: AssetRecord {
    /// Walk parameters for this particular record.
    fn walk(&self) -> WalkParams;

    /// Current primary value (price, level or rate).
    fn primary(&self) -> f64;

    /// Current running change.
    fn change(&self) -> f64;

    /// Copy of `self` carrying the perturbed numbers and a fresh timestamp.
    fn with_perturbation(&self, step: Perturbation, now: DateTime<Utc>) -> Self;

    /// Mutate with an explicit uniform draw in `[0, 1)`.
    fn mutate_with_draw(&self, draw: f64, now: DateTime<Utc>) -> Self {
        let step = self.walk().perturb(self.primary(), self.change(), draw);
        self.with_perturbation(step, now)
    }

    /// Mutate drawing from `rng`.
    fn mutate<R: Rng + ?Sized>(&self, rng: &mut R, now: DateTime<Utc>) -> Self {
        self.mutate_with_draw(rng.random::<f64>(), now)
    }
}

/// Element-wise mutation of a whole snapshot.
pub fn mutate_all<T: Mutable, R: Rng + ?Sized>(
    records: &[T],
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<T> {
    records.iter().map(|r| r.mutate(rng, now)).collect()
}

impl Mutable for Equity {
    fn walk(&self) -> WalkParams {
        EQUITY_WALK
    }

    fn primary(&self) -> f64 {
        self.price
    }

    fn change(&self) -> f64 {
        self.change
    }

    fn with_perturbation(&self, step: Perturbation, now: DateTime<Utc>) -> Self {
        Equity {
            price: step.value,
            change: step.change,
            change_percent: step.change_percent,
            last_updated: now,
            ..self.clone()
        }
    }
}

impl Mutable for MarketIndex {
    fn walk(&self) -> WalkParams {
        INDEX_WALK
    }

    fn primary(&self) -> f64 {
        self.value
    }

    fn change(&self) -> f64 {
        self.change
    }

    fn with_perturbation(&self, step: Perturbation, now: DateTime<Utc>) -> Self {
        MarketIndex {
            value: step.value,
            change: step.change,
            change_percent: step.change_percent,
            last_updated: now,
            ..self.clone()
        }
    }
}

impl Mutable for CurrencyPair {
    fn walk(&self) -> WalkParams {
        CURRENCY_WALK
    }

    fn primary(&self) -> f64 {
        self.rate
    }

    fn change(&self) -> f64 {
        self.change
    }

    fn with_perturbation(&self, step: Perturbation, now: DateTime<Utc>) -> Self {
        CurrencyPair {
            rate: step.value,
            change: step.change,
            change_percent: step.change_percent,
            last_updated: now,
            ..self.clone()
        }
    }
}

impl Mutable for CryptoAsset {
    /// Majors move less; sub-unit coins keep four decimals.
    fn walk(&self) -> WalkParams {
        let volatility = if MAJOR_CRYPTOS.contains(&self.symbol.as_str()) {
            MAJOR_CRYPTO_VOLATILITY
        } else {
            MINOR_CRYPTO_VOLATILITY
        };
        let decimals = if self.price < 1.0 { 4 } else { 2 };
        WalkParams::new(volatility, CRYPTO_FLOOR, decimals)
    }

    fn primary(&self) -> f64 {
        self.price
    }

    fn change(&self) -> f64 {
        self.change
    }

    fn with_perturbation(&self, step: Perturbation, now: DateTime<Utc>) -> Self {
        CryptoAsset {
            price: step.value,
            change: step.change,
            change_percent: step.change_percent,
            last_updated: now,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap()
    }

    fn tick_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 3).unwrap()
    }

    fn aapl() -> Equity {
        fixtures::equities(seeded_at()).remove(0)
    }

    #[test]
    fn aapl_moves_by_a_quarter_of_its_range_on_draw_075() {
        let next = aapl().mutate_with_draw(0.75, tick_at());

        // delta = 0.25 * 187.32 * 0.01 = 0.4683
        assert_eq!(next.price, 187.79);
        assert_eq!(next.change, 1.75);
        assert_eq!(next.change_percent, 0.94);
        assert_eq!(next.last_updated, tick_at());
    }

    #[test]
    fn change_percent_is_relative_to_previous_value() {
        // delta 0.4: 2.4 / (100.4 - 2.4) * 100 = 2.4489...
        let step = EQUITY_WALK.perturb(100.0, 2.0, 0.9);
        assert_eq!(step.value, 100.4);
        assert_eq!(step.change, 2.4);
        assert_eq!(step.change_percent, 2.45);
    }

    #[test]
    fn currency_walk_rounds_to_four_places() {
        // delta = 0.25 * 1.0856 * 0.0008 = 0.00021712
        let step = CURRENCY_WALK.perturb(1.0856, 0.0012, 0.75);
        assert_eq!(step.value, 1.0858);
        assert_eq!(step.change, 0.0014);
        assert_eq!(step.change_percent, 0.13);
    }

    #[test]
    fn index_walk_uses_low_volatility() {
        // delta = 0.25 * 4783.45 * 0.0015 = 1.79379...
        let step = INDEX_WALK.perturb(4783.45, 12.34, 0.75);
        assert_eq!(step.value, 4785.24);
        assert_eq!(step.change, 14.13);
        assert_eq!(step.change_percent, 0.3);
    }

    #[test]
    fn draw_at_midpoint_keeps_numbers_but_refreshes_timestamp() {
        let before = aapl();
        let after = before.mutate_with_draw(0.5, tick_at());
        assert_eq!(after.price, before.price);
        assert_eq!(after.change, before.change);
        assert_ne!(after.last_updated, before.last_updated);
    }

    #[test]
    fn value_is_floored_at_class_minimum() {
        let step = EQUITY_WALK.perturb(0.01, 0.0, 0.0);
        assert_eq!(step.value, 0.01);
        // change keeps the unclamped delta
        assert_eq!(step.change, round_to(-0.5 * 0.01 * 0.01, 2));

        let tiny = WalkParams::new(MINOR_CRYPTO_VOLATILITY, CRYPTO_FLOOR, 4).perturb(
            CRYPTO_FLOOR,
            0.0,
            0.0,
        );
        assert!(tiny.value > 0.0);
    }

    #[test]
    fn zero_divisor_yields_non_finite_percent() {
        // value == change after the step: 0.5 + 0 = 0.5 and change 0.5
        let step = WalkParams::new(0.01, 0.01, 2).perturb(0.5, 0.5, 0.5);
        assert!(!step.change_percent.is_finite());
    }

    #[test]
    fn crypto_volatility_depends_on_symbol() {
        let coins = fixtures::cryptos(seeded_at());
        let by_symbol = |s: &str| coins.iter().find(|c| c.symbol == s).unwrap().walk();
        assert_eq!(by_symbol("BTC").volatility, MAJOR_CRYPTO_VOLATILITY);
        assert_eq!(by_symbol("ETH").volatility, MAJOR_CRYPTO_VOLATILITY);
        assert_eq!(by_symbol("SOL").volatility, MINOR_CRYPTO_VOLATILITY);
        assert_eq!(by_symbol("XRP").decimals, 4);
        assert_eq!(by_symbol("BNB").decimals, 2);
    }

    #[test]
    fn sub_unit_crypto_keeps_four_decimals() {
        let xrp = fixtures::cryptos(seeded_at())
            .into_iter()
            .find(|c| c.symbol == "XRP")
            .unwrap();
        let next = xrp.mutate_with_draw(0.9, tick_at());
        // 0.52 + 0.4 * 0.52 * 0.012 = 0.522496
        assert_eq!(next.price, 0.5225);
        assert_eq!(next.change, -0.0055);
    }

    #[test]
    fn mutation_preserves_descriptive_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        for pair in fixtures::currencies(seeded_at()) {
            let next = pair.mutate(&mut rng, tick_at());
            assert_eq!(next.symbol, pair.symbol);
            assert_eq!(next.from_currency, pair.from_currency);
            assert_eq!(next.to_currency, pair.to_currency);
        }
        for coin in fixtures::cryptos(seeded_at()) {
            let next = coin.mutate(&mut rng, tick_at());
            assert_eq!(next.symbol, coin.symbol);
            assert_eq!(next.name, coin.name);
            assert_eq!(next.supply, coin.supply);
            assert_eq!(next.market_cap, coin.market_cap);
        }
        for index in fixtures::indices(seeded_at()) {
            let next = index.mutate(&mut rng, tick_at());
            assert_eq!(next.region, index.region);
            assert_eq!(next.name, index.name);
        }
    }

    #[test]
    fn step_stays_within_half_the_volatility_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stocks = fixtures::equities(seeded_at());
        for _ in 0..200 {
            let next = mutate_all(&stocks, &mut rng, tick_at());
            for (before, after) in stocks.iter().zip(&next) {
                let bound = before.price * EQUITY_WALK.volatility / 2.0 + 0.005;
                assert!(after.price > 0.0);
                assert!((after.price - before.price).abs() <= bound);
            }
            stocks = next;
        }
    }

    #[test]
    fn seeded_generators_reproduce_the_same_walk() {
        let indices = fixtures::indices(seeded_at());
        let a = mutate_all(&indices, &mut StdRng::seed_from_u64(11), tick_at());
        let b = mutate_all(&indices, &mut StdRng::seed_from_u64(11), tick_at());
        assert_eq!(a, b);
    }
}
