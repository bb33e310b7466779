use pc_app::query;
use pc_psychro::{AirState, STANDARD_PRESSURE};

/// Side-panel calculator for a single moist-air state.
pub struct CalculatorView {
    t: f64,
    rh_percent: f64,
    p: f64,
    sr: f64,
    ws: f64,
}

impl Default for CalculatorView {
    fn default() -> Self {
        Self {
            t: 25.0,
            rh_percent: 50.0,
            p: STANDARD_PRESSURE,
            sr: 0.0,
            ws: 1.0,
        }
    }
}

impl CalculatorView {
    pub fn set_pressure(&mut self, p: f64) {
        self.p = p;
    }

    /// Current state, or the reason it cannot be computed.
    pub fn state(&self) -> Result<AirState, String> {
        query::state_point(self.t, self.rh_percent / 100.0, self.p).map_err(|e| e.to_string())
    }

    /// Chart coordinates of the current state.
    pub fn chart_point(&self) -> Option<[f64; 2]> {
        self.state().ok().map(|s| [s.t, s.w])
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("State point");
        ui.separator();

        egui::Grid::new("calculator_inputs")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Dry bulb");
                ui.add(
                    egui::DragValue::new(&mut self.t)
                        .speed(0.1)
                        .range(-40.0..=90.0)
                        .suffix(" °C"),
                );
                ui.end_row();

                ui.label("RH");
                ui.add(
                    egui::DragValue::new(&mut self.rh_percent)
                        .speed(0.5)
                        .range(0.0..=100.0)
                        .suffix(" %"),
                );
                ui.end_row();

                ui.label("Pressure");
                ui.add(
                    egui::DragValue::new(&mut self.p)
                        .speed(10.0)
                        .range(50_000.0..=120_000.0)
                        .suffix(" Pa"),
                );
                ui.end_row();

                ui.label("Solar radiation");
                ui.add(
                    egui::DragValue::new(&mut self.sr)
                        .speed(5.0)
                        .range(0.0..=1500.0)
                        .suffix(" W/m²"),
                );
                ui.end_row();

                ui.label("Wind speed");
                ui.add(
                    egui::DragValue::new(&mut self.ws)
                        .speed(0.1)
                        .range(0.0..=30.0)
                        .suffix(" m/s"),
                );
                ui.end_row();
            });

        ui.separator();

        let state = match self.state() {
            Ok(state) => state,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, e);
                return;
            }
        };

        egui::Grid::new("calculator_outputs")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                let mut row = |name: &str, value: String| {
                    ui.label(name);
                    ui.monospace(value);
                    ui.end_row();
                };
                row("Saturation pressure", format!("{:.1} Pa", state.p_sat));
                row("Vapor pressure", format!("{:.1} Pa", state.p_v));
                row("Humidity ratio", format!("{:.5} kg/kg", state.w));
                row("Specific humidity", format!("{:.5} kg/kg", state.q));
                row("Enthalpy", format!("{:.2} kJ/kg", state.h));
                row("Specific volume", format!("{:.4} m³/kg", state.v));
                row("Density", format!("{:.4} kg/m³", state.rho));
                let t_dp = match state.t_dp {
                    Some(t) if state.dew_point_converged => format!("{t:.2} °C"),
                    Some(t) => format!("{t:.2} °C (not converged)"),
                    None => "n/a".to_string(),
                };
                row("Dew point", t_dp);

                let itu = query::itu(state.t, state.rh)
                    .map(|v| format!("{v:.1}"))
                    .unwrap_or_else(|e| e.to_string());
                row("ITU", itu);
                let hli = query::hli(state.t, state.rh, self.sr, self.ws)
                    .map(|v| format!("{v:.1}"))
                    .unwrap_or_else(|e| e.to_string());
                row("HLI", hli);
            });
    }
}
