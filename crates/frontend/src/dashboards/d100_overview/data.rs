//! Figures of the overview dashboard. They are fixed sample numbers: the
//! backend has no reporting endpoint.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpi {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: f64,
    pub previous: f64,
    pub money: bool,
}

impl Kpi {
    /// Change against the previous period in percent; `None` without a base
    pub fn change_percent(&self) -> Option<f64> {
        (self.previous != 0.0).then(|| (self.value - self.previous) / self.previous * 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPoint {
    pub label: &'static str,
    pub value: f64,
}

pub const KPIS: [Kpi; 4] = [
    Kpi { label: "Revenue", icon: "gem", value: 184_250.0, previous: 162_400.0, money: true },
    Kpi { label: "Orders", icon: "orders", value: 312.0, previous: 298.0, money: false },
    Kpi { label: "Average order", icon: "percent", value: 590.5, previous: 545.0, money: true },
    Kpi { label: "Returns", icon: "refresh", value: 9.0, previous: 12.0, money: false },
];

pub const MONTHLY_REVENUE: [BarPoint; 6] = [
    BarPoint { label: "May", value: 128_400.0 },
    BarPoint { label: "Jun", value: 141_900.0 },
    BarPoint { label: "Jul", value: 133_100.0 },
    BarPoint { label: "Aug", value: 150_700.0 },
    BarPoint { label: "Sep", value: 162_400.0 },
    BarPoint { label: "Oct", value: 184_250.0 },
];

pub const SALES_BY_CATEGORY: [BarPoint; 5] = [
    BarPoint { label: "Rings", value: 68_300.0 },
    BarPoint { label: "Necklaces", value: 41_750.0 },
    BarPoint { label: "Earrings", value: 33_900.0 },
    BarPoint { label: "Bracelets", value: 27_600.0 },
    BarPoint { label: "Watches", value: 12_700.0 },
];

/// Bar length relative to the largest value, 0..=100
pub fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).min(100.0)
}

pub fn max_value(points: &[BarPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(50.0, 200.0), 25.0);
        assert_eq!(bar_percent(300.0, 200.0), 100.0);
        assert_eq!(bar_percent(10.0, 0.0), 0.0);
        assert_eq!(bar_percent(-5.0, 10.0), 0.0);
    }

    #[test]
    fn test_change_percent() {
        let kpi = Kpi { label: "x", icon: "x", value: 110.0, previous: 100.0, money: false };
        assert!((kpi.change_percent().unwrap() - 10.0).abs() < 1e-9);
        let fresh = Kpi { previous: 0.0, ..kpi };
        assert_eq!(fresh.change_percent(), None);
    }

    #[test]
    fn test_latest_month_is_the_peak() {
        let max = max_value(&MONTHLY_REVENUE);
        assert_eq!(bar_percent(MONTHLY_REVENUE[5].value, max), 100.0);
        assert_eq!(MONTHLY_REVENUE[5].value, KPIS[0].value);
    }
}
