use crate::views::{CalculatorView, ChartView};
use egui_file_dialog::{DialogMode, FileDialog};
use pc_chart::ChartGeometry;
use pc_project::{ChartConfig, IsoSetDef, IsolineKind};
use std::path::{Path, PathBuf};

pub struct PsychroApp {
    config: ChartConfig,
    config_path: Option<PathBuf>,
    geometry: Option<ChartGeometry>,
    file_dialog: FileDialog,
    last_directory: Option<PathBuf>,
    status_message: Option<String>,
    chart_view: ChartView,
    calculator_view: CalculatorView,
}

/// Chart shown before any configuration is opened.
fn starter_config() -> ChartConfig {
    let rh: Vec<f64> = (1..=9).map(|i| f64::from(i) / 10.0).collect();
    let mut rh_set = IsoSetDef::new(IsolineKind::RelativeHumidity, rh);
    rh_set.style = "--".to_string();
    rh_set.cmap = Some("viridis".to_string());

    ChartConfig {
        isos: vec![
            rh_set,
            IsoSetDef::new(IsolineKind::Enthalpy, vec![20.0, 40.0, 60.0, 80.0, 100.0]),
        ],
        ..ChartConfig::default()
    }
}

impl PsychroApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            config: starter_config(),
            config_path: None,
            geometry: None,
            file_dialog: FileDialog::new(),
            last_directory: None,
            status_message: None,
            chart_view: ChartView::default(),
            calculator_view: CalculatorView::default(),
        };
        app.rebuild();
        app
    }

    fn rebuild(&mut self) {
        match pc_app::build_chart(&self.config) {
            Ok(geometry) => {
                self.geometry = Some(geometry);
            }
            Err(e) => {
                self.geometry = None;
                self.status_message = Some(format!("Failed to build chart: {}", e));
            }
        }
    }

    fn open_config(&mut self, path: PathBuf) {
        match pc_app::load_config(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "configuration opened");
                if let Some(parent) = path.parent() {
                    self.last_directory = Some(parent.to_path_buf());
                }
                self.calculator_view.set_pressure(config.chart.pressure);
                self.config = config;
                self.config_path = Some(path);
                self.status_message = None;
                self.rebuild();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to open configuration");
                self.status_message = Some(format!("Failed to load configuration: {}", e));
            }
        }
    }

    fn reload(&mut self) {
        if let Some(path) = self.config_path.clone() {
            self.open_config(path);
        }
    }

    /// Where the exported chart goes: `chart.output`, next to the configuration file.
    fn export_path(&self) -> PathBuf {
        let output = Path::new(&self.config.chart.output);
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(dir) if output.is_relative() => dir.join(output),
            _ => output.to_path_buf(),
        }
    }

    fn export_chart(&mut self) {
        let Some(geometry) = self.geometry.as_ref() else {
            return;
        };
        let path = self.export_path();
        self.status_message = Some(match pc_chart::save_chart(&path, geometry) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "chart exported");
                format!("Chart written to {}", path.display())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "chart export failed");
                format!("Failed to write chart: {}", e)
            }
        });
    }
}

impl eframe::App for PsychroApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open").clicked() {
                    let initial_dir = self.last_directory.as_ref().and_then(|p| p.to_str());
                    let _ = self
                        .file_dialog
                        .open(DialogMode::SelectFile, true, initial_dir);
                }

                ui.add_enabled_ui(self.config_path.is_some(), |ui| {
                    if ui.button("Reload").clicked() {
                        self.reload();
                    }
                });

                ui.add_enabled_ui(self.geometry.is_some(), |ui| {
                    if ui.button("Export").clicked() {
                        self.export_chart();
                    }
                });

                ui.separator();
                match &self.config_path {
                    Some(path) => ui.label(path.display().to_string()),
                    None => ui.label("No configuration loaded"),
                };
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.open_config(path.to_path_buf());
        }

        if let Some(message) = self.status_message.clone() {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(message);
                    if ui.small_button("✕").clicked() {
                        self.status_message = None;
                    }
                });
            });
        }

        egui::SidePanel::right("calculator")
            .default_width(280.0)
            .show(ctx, |ui| {
                self.calculator_view.show(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.geometry.as_ref() {
            Some(geometry) => {
                let highlight = self.calculator_view.chart_point();
                self.chart_view.show(ui, geometry, highlight);
            }
            None => {
                ui.label("Open a chart configuration to draw it");
            }
        });
    }
}
