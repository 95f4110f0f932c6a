use serde::Serialize;

use super::entities::StarSystem;
use super::trade_route::PricedRoute;

/// Money figures shared by freshly priced routes and stored route records.
pub trait RouteFigures {
    fn trade_value(&self) -> f64;
    fn fuel_cost(&self) -> f64;
    fn is_active(&self) -> bool {
        true
    }
}

impl RouteFigures for PricedRoute {
    fn trade_value(&self) -> f64 {
        self.total_trade_value
    }

    fn fuel_cost(&self) -> f64 {
        self.total_fuel_cost
    }
}

/// Dashboard totals for a universe and its routes.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStatistics {
    pub total_systems: usize,
    pub total_routes: usize,
    pub total_trade_value: f64,
    pub total_fuel_cost: f64,
    pub average_profit: f64,
    pub active_routes: usize,
    pub profitable_routes: usize,
    pub trade_hubs: usize,
    pub average_economic_growth: f64,
}

pub fn summarize_routes<R: RouteFigures>(systems: &[StarSystem], routes: &[R]) -> RouteStatistics {
    let total_trade_value: f64 = routes.iter().map(RouteFigures::trade_value).sum();
    let total_fuel_cost: f64 = routes.iter().map(RouteFigures::fuel_cost).sum();

    let average_profit = if routes.is_empty() {
        0.0
    } else {
        (total_trade_value - total_fuel_cost) / routes.len() as f64
    };
    let average_economic_growth = if systems.is_empty() {
        0.0
    } else {
        systems.iter().map(|s| s.economic_growth).sum::<f64>() / systems.len() as f64
    };

    RouteStatistics {
        total_systems: systems.len(),
        total_routes: routes.len(),
        total_trade_value,
        total_fuel_cost,
        average_profit,
        active_routes: routes.iter().filter(|r| r.is_active()).count(),
        profitable_routes: routes
            .iter()
            .filter(|r| r.trade_value() > r.fuel_cost())
            .count(),
        trade_hubs: systems.iter().filter(|s| s.is_trade_hub).count(),
        average_economic_growth,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfitIndicator {
    pub status: ProfitIndicatorStatus,
    /// Profit as a share of trade value.
    pub margin: f64,
    pub rationale: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfitIndicatorStatus {
    Green,
    Yellow,
    Red,
}

impl ProfitIndicatorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "good",
            Self::Yellow => "thin",
            Self::Red => "loss",
        }
    }
}

pub fn profitability_indicator<R: RouteFigures>(route: &R) -> ProfitIndicator {
    let trade_value = route.trade_value();
    let fuel_cost = route.fuel_cost();
    let profit = trade_value - fuel_cost;

    if trade_value <= 0.0 {
        return ProfitIndicator {
            status: ProfitIndicatorStatus::Red,
            margin: 0.0,
            rationale: "No cargo value on this route".to_string(),
        };
    }

    let margin = profit / trade_value;
    let status = if margin >= 0.6 {
        ProfitIndicatorStatus::Green
    } else if margin >= 0.25 {
        ProfitIndicatorStatus::Yellow
    } else {
        ProfitIndicatorStatus::Red
    };

    ProfitIndicator {
        status,
        margin,
        rationale: format!(
            "Net = {:.0} - fuel {:.0} = {:.0}",
            trade_value, fuel_cost, profit
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Coordinate;

    struct Figures(f64, f64, bool);

    impl RouteFigures for Figures {
        fn trade_value(&self) -> f64 {
            self.0
        }

        fn fuel_cost(&self) -> f64 {
            self.1
        }

        fn is_active(&self) -> bool {
            self.2
        }
    }

    #[test]
    fn summary_of_nothing_is_zeroed() {
        let stats = summarize_routes::<Figures>(&[], &[]);
        assert_eq!(stats, RouteStatistics::default());
    }

    #[test]
    fn summary_totals_and_averages() {
        let systems = vec![
            StarSystem::new("a", "A", Coordinate::default()).with_economic_growth(10.0),
            StarSystem::new("b", "B", Coordinate::default())
                .with_economic_growth(-4.0)
                .as_trade_hub(),
        ];
        let routes = vec![
            Figures(500.0, 200.0, true),
            Figures(100.0, 300.0, false),
            Figures(0.0, 0.0, true),
        ];

        let stats = summarize_routes(&systems, &routes);
        assert_eq!(stats.total_systems, 2);
        assert_eq!(stats.total_routes, 3);
        assert_eq!(stats.total_trade_value, 600.0);
        assert_eq!(stats.total_fuel_cost, 500.0);
        assert!((stats.average_profit - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.active_routes, 2);
        assert_eq!(stats.profitable_routes, 1);
        assert_eq!(stats.trade_hubs, 1);
        assert_eq!(stats.average_economic_growth, 3.0);
    }

    #[test]
    fn indicator_thresholds() {
        let status = |trade_value, fuel_cost| {
            profitability_indicator(&Figures(trade_value, fuel_cost, true)).status
        };
        assert_eq!(status(1000.0, 300.0), ProfitIndicatorStatus::Green);
        assert_eq!(status(1000.0, 700.0), ProfitIndicatorStatus::Yellow);
        assert_eq!(status(1000.0, 900.0), ProfitIndicatorStatus::Red);
        assert_eq!(status(560.0, 714.3), ProfitIndicatorStatus::Red);

        let empty = profitability_indicator(&Figures(0.0, 10.0, true));
        assert_eq!(empty.status, ProfitIndicatorStatus::Red);
        assert_eq!(empty.margin, 0.0);
    }
}
