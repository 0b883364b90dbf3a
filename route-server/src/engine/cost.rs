//! Per-mode cost models.
//!
//! Each model maps a leg distance in km to a [`CostRange`] in whole currency
//! units, rounded to the nearest unit. Negative or non-finite distances are
//! priced as zero.

use crate::domain::CostRange;

use super::config::RateTable;

/// Round to whole currency units, saturating into `u32`.
fn units(amount: f64) -> u32 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }
    amount.round().min(f64::from(u32::MAX)) as u32
}

fn clamp_distance(distance_km: f64) -> f64 {
    if distance_km.is_finite() && distance_km > 0.0 {
        distance_km
    } else {
        0.0
    }
}

/// Order two bounds into a range.
fn range(a: u32, b: u32) -> CostRange {
    CostRange::new(a.min(b), a.max(b)).unwrap_or(CostRange::FREE)
}

/// Private car: fuel at the low end, fuel plus tolls and parking at the high end.
pub fn driving_cost(distance_km: f64, rates: &RateTable) -> CostRange {
    let d = clamp_distance(distance_km);
    let fuel = units(d * rates.petrol_per_km);
    let extras = units(d * rates.tolls_parking_per_km);
    range(fuel, fuel.saturating_add(extras))
}

/// Rideshare: cheaper provider quote up to the dearer quote under surge.
pub fn rideshare_cost(distance_km: f64, rates: &RateTable) -> CostRange {
    let d = clamp_distance(distance_km);
    let [a, b] = &rates.rideshare;
    let (qa, qb) = (a.quote(d), b.quote(d));
    range(
        units(qa.min(qb)),
        units(qa.max(qb) * rates.surge_multiplier),
    )
}

/// Auto-rickshaw: metered fare, up to the markup for night or haggling.
pub fn auto_rickshaw_cost(distance_km: f64, rates: &RateTable) -> CostRange {
    let d = clamp_distance(distance_km);
    let fare = rates.auto_rickshaw_base + d * rates.auto_rickshaw_per_km;
    range(units(fare), units(fare * rates.auto_rickshaw_markup))
}

/// Public transit: between the bus and metro fares, each with a minimum ticket.
pub fn public_transit_cost(distance_km: f64, rates: &RateTable) -> CostRange {
    let d = clamp_distance(distance_km);
    let bus = rates.bus_min_fare.max(d * rates.bus_per_km);
    let metro = rates.metro_min_fare.max(d * rates.metro_per_km);
    range(units(bus.min(metro)), units(bus.max(metro)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> RateTable {
        RateTable::default()
    }

    fn pair(c: CostRange) -> (u32, u32) {
        (c.min(), c.max())
    }

    #[test]
    fn driving_ten_km() {
        // fuel 85, tolls/parking 20
        assert_eq!(pair(driving_cost(10.0, &rates())), (85, 105));
    }

    #[test]
    fn driving_rounds_each_part() {
        // 3.3 km: fuel 28.05 -> 28, extras 6.6 -> 7
        assert_eq!(pair(driving_cost(3.3, &rates())), (28, 35));
    }

    #[test]
    fn rideshare_ten_km() {
        // Uber 200, Ola 185; max is 200 * 1.5
        assert_eq!(pair(rideshare_cost(10.0, &rates())), (185, 300));
    }

    #[test]
    fn rideshare_surge_uses_higher_quote() {
        let mut rates = rates();
        rates.rideshare.swap(0, 1);
        assert_eq!(pair(rideshare_cost(10.0, &rates)), (185, 300));
    }

    #[test]
    fn rideshare_zero_distance_is_base_fares() {
        // Ola 45, Uber 50 * 1.5
        assert_eq!(pair(rideshare_cost(0.0, &rates())), (45, 75));
    }

    #[test]
    fn auto_rickshaw_ten_km() {
        // 25 + 120 = 145; 145 * 1.2 = 174
        assert_eq!(pair(auto_rickshaw_cost(10.0, &rates())), (145, 174));
    }

    #[test]
    fn public_transit_twelve_km() {
        // bus 18, metro 30
        assert_eq!(pair(public_transit_cost(12.0, &rates())), (18, 30));
    }

    #[test]
    fn public_transit_minimum_tickets() {
        // 1 km: bus max(10, 1.5) = 10, metro max(15, 2.5) = 15
        assert_eq!(pair(public_transit_cost(1.0, &rates())), (10, 15));
    }

    #[test]
    fn public_transit_crossover() {
        // 8 km: bus max(10, 12) = 12, metro max(15, 20) = 20
        assert_eq!(pair(public_transit_cost(8.0, &rates())), (12, 20));
    }

    #[test]
    fn half_units_round_up() {
        // 1 km: fuel 8.5 -> 9
        assert_eq!(driving_cost(1.0, &rates()).min(), 9);
    }

    #[test]
    fn negative_and_nan_distance_priced_as_zero() {
        assert_eq!(pair(driving_cost(-5.0, &rates())), (0, 0));
        assert_eq!(pair(driving_cost(f64::NAN, &rates())), (0, 0));
        assert_eq!(pair(public_transit_cost(-1.0, &rates())), (10, 15));
    }

    #[test]
    fn inverted_config_still_yields_valid_range() {
        let mut rates = rates();
        rates.surge_multiplier = 0.5;
        let cost = rideshare_cost(10.0, &rates);
        assert!(cost.min() <= cost.max());
    }
}
