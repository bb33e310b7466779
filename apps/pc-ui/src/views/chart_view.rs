use crate::colors::{line_style, marker_shape, parse_color};
use egui::{Align2, Color32, Stroke};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoint, Points, Polygon, Text};
use pc_chart::ChartGeometry;

/// Alpha of zone fills.
const ZONE_FILL_ALPHA: u8 = 51;

pub struct ChartView {
    show_isolines: bool,
    show_zones: bool,
    show_points: bool,
    show_labels: bool,
}

impl Default for ChartView {
    fn default() -> Self {
        Self {
            show_isolines: true,
            show_zones: true,
            show_points: true,
            show_labels: true,
        }
    }
}

impl ChartView {
    /// Draw `geometry`, plus the calculator's state point when there is one.
    pub fn show(&mut self, ui: &mut egui::Ui, geometry: &ChartGeometry, highlight: Option<[f64; 2]>) {
        ui.horizontal(|ui| {
            ui.heading(&geometry.title);
            ui.separator();
            ui.checkbox(&mut self.show_isolines, "Isolines");
            ui.checkbox(&mut self.show_zones, "Zones");
            ui.checkbox(&mut self.show_points, "Points");
            ui.checkbox(&mut self.show_labels, "Labels");
        });
        ui.separator();

        Plot::new("psychrometric_chart")
            .legend(Legend::default())
            .x_axis_label("Dry-bulb temperature (°C)")
            .y_axis_label("Humidity ratio (kg vapor / kg dry air)")
            .include_x(geometry.t_axis[0])
            .include_x(geometry.t_axis[1])
            .include_y(geometry.w_axis[0])
            .include_y(geometry.w_axis[1])
            .show(ui, |plot_ui| {
                let sat = &geometry.saturation;
                plot_ui.line(
                    Line::new(sat.points.clone())
                        .name(&sat.label)
                        .color(parse_color(&sat.color, Color32::from_rgb(0xff, 0x7f, 0x0e)))
                        .width(sat.width as f32),
                );

                if self.show_isolines {
                    for iso in &geometry.isolines {
                        let curve = &iso.curve;
                        plot_ui.line(
                            Line::new(curve.points.clone())
                                .name(iso.family.as_str())
                                .color(parse_color(&curve.color, Color32::GRAY))
                                .width(curve.width as f32)
                                .style(line_style(&curve.style)),
                        );
                        if self.show_labels
                            && let Some(&[t, w]) = curve.points.last()
                        {
                            plot_ui.text(
                                Text::new(PlotPoint::new(t, w), curve.label.as_str())
                                    .anchor(Align2::LEFT_CENTER)
                                    .color(parse_color(&curve.color, Color32::GRAY)),
                            );
                        }
                    }
                }

                if self.show_zones {
                    for zone in &geometry.zones {
                        let edge = parse_color(&zone.edgecolor, Color32::BLACK);
                        let fill = zone
                            .facecolor
                            .as_deref()
                            .map(|c| {
                                let [r, g, b, _] = parse_color(c, edge).to_array();
                                Color32::from_rgba_unmultiplied(r, g, b, ZONE_FILL_ALPHA)
                            })
                            .unwrap_or(Color32::TRANSPARENT);
                        plot_ui.polygon(
                            Polygon::new(zone.points.clone())
                                .name(&zone.name)
                                .stroke(Stroke::new(zone.linewidth as f32, edge))
                                .fill_color(fill),
                        );
                    }
                }

                if self.show_points {
                    for point in &geometry.points {
                        let color = parse_color(&point.color, Color32::BLACK);
                        plot_ui.points(
                            Points::new(vec![[point.t, point.w]])
                                .name(&point.label)
                                .shape(marker_shape(&point.marker))
                                .radius(5.0)
                                .filled(true)
                                .color(color),
                        );
                        if self.show_labels {
                            plot_ui.text(
                                Text::new(PlotPoint::new(point.t, point.w), format!("  {}", point.label))
                                    .anchor(Align2::LEFT_CENTER)
                                    .color(color),
                            );
                        }
                    }
                }

                if let Some(state) = highlight {
                    plot_ui.points(
                        Points::new(vec![state])
                            .name("State point")
                            .shape(MarkerShape::Diamond)
                            .radius(7.0)
                            .filled(true)
                            .color(Color32::from_rgb(0xd6, 0x27, 0x28)),
                    );
                }
            });
    }
}
