mod canvas;

use crate::runtime::AppError;
use canvas::EguiCanvas;
use flow_core::{EngineSimulation, RpmSource, SimulatedEngine, TelemetryLoop};
use flow_render::{paint, ChartLayout};
use std::time::{Duration, Instant};
use tracing::info;

const WINDOW_TITLE: &str = "Boat Performance Chart";
const REPAINT_INTERVAL: Duration = Duration::from_millis(50);

struct ChartApp {
    sim: EngineSimulation,
    feed: TelemetryLoop<SimulatedEngine>,
    simulate: bool,
    rpm_input: f64,
    last_frame: Instant,
}

impl ChartApp {
    fn new(sim: EngineSimulation, feed: TelemetryLoop<SimulatedEngine>) -> Self {
        let rpm_input = sim.current_rpm();
        Self {
            sim,
            feed,
            simulate: false,
            rpm_input,
            last_frame: Instant::now(),
        }
    }

    /// Hand control back to the feed from wherever the slider left the
    /// engine.
    fn resume_simulation(&mut self) {
        self.feed.source_mut().reset_to(self.sim.current_rpm());
        self.simulate = true;
    }

    fn status_line(&self) -> String {
        let state = self.sim.state();
        format!(
            "RPM {:.0}   Fuel {:.1} L/h   Median {:.1} L/h   {}",
            state.current_rpm,
            state.current_fuel_flow,
            state.median_at_rpm,
            if state.is_eco_mode() { "ECO MODE" } else { "NORMAL" }
        )
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt_s = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        if self.simulate {
            self.feed.tick(&mut self.sim, dt_s);
            self.rpm_input = self.sim.current_rpm();
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut simulate = self.simulate;
                if ui.checkbox(&mut simulate, "Simulate telemetry").changed() {
                    if simulate {
                        self.resume_simulation();
                    } else {
                        self.simulate = false;
                    }
                }
                let slider = ui.add_enabled(
                    !self.simulate,
                    egui::Slider::new(&mut self.rpm_input, 0.0..=6000.0)
                        .step_by(50.0)
                        .text("RPM"),
                );
                if slider.changed() {
                    self.sim.set_current_rpm(self.rpm_input);
                }
            });
            ui.label(self.status_line());
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let layout = ChartLayout::new(
                    f64::from(rect.width()),
                    f64::from(rect.height()),
                    *self.sim.bounds(),
                );
                let mut canvas = EguiCanvas::new(&painter, rect.min);
                paint(&mut canvas, &layout, self.sim.table(), self.sim.state());
            });
    }
}

pub fn run_window(
    sim: EngineSimulation,
    feed: TelemetryLoop<SimulatedEngine>,
) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1024.0, 720.0]),
        ..Default::default()
    };
    info!("Opening chart window");
    let app = ChartApp::new(sim, feed);
    eframe::run_native(WINDOW_TITLE, options, Box::new(move |_cc| Box::new(app)))
        .map_err(|err| AppError::Window(err.to_string()))
}
