pub mod calculator_view;
pub mod chart_view;

pub use calculator_view::CalculatorView;
pub use chart_view::ChartView;
