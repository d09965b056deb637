//! Interactive window for the de Casteljau visualizer.
//!
//! Hosts the frame loop: collects pointer and keyboard input, feeds it through the
//! [`InteractionMapper`], advances the [`Visualizer`] and paints it with egui.

use std::time::Duration;

use casteljau_viz::config::{
    BUTTON_TEXT_SIZE, TARGET_FPS, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use casteljau_viz::draw::{Canvas, Color};
use casteljau_viz::input::{Button, InputEvent, InteractionMapper, Key, Layout};
use casteljau_viz::{Point, Visualizer};
use eframe::egui;

const KEY_BINDINGS: [(egui::Key, Key); 5] = [
    (egui::Key::Space, Key::Space),
    (egui::Key::U, Key::U),
    (egui::Key::R, Key::R),
    (egui::Key::Equals, Key::Equal),
    (egui::Key::Minus, Key::Minus),
];

fn main() -> eframe::Result {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("casteljau-viz-app v{} starting", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_title(WINDOW_TITLE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(VisualizerApp::new()))),
    )
}

struct VisualizerApp {
    visualizer: Visualizer,
    mapper: InteractionMapper,
}

impl VisualizerApp {
    fn new() -> Self {
        VisualizerApp {
            visualizer: Visualizer::new(),
            mapper: InteractionMapper::new(Layout::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
        }
    }

    fn handle(&mut self, event: InputEvent) {
        if let Some(command) = self.mapper.map(event) {
            log::debug!("{:?} -> {:?}", event, command);
            self.visualizer.apply(command);
        }
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let elapsed = ctx.input(|i| i.stable_dt);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(color32(Color::BACKGROUND)))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                self.mapper.resize(area.width(), area.height());

                // Animation first, so a click lands on this frame's state
                self.visualizer.advance(elapsed);

                let pressed = ctx.input(|i| {
                    if i.pointer.primary_pressed() {
                        i.pointer.interact_pos()
                    } else {
                        None
                    }
                });
                if let Some(position) = pressed {
                    let position = position - area.min;
                    self.handle(InputEvent::PointerPressed(Point::new(position.x, position.y)));
                }

                let mut canvas = PainterCanvas {
                    painter: ui.painter(),
                    origin: area.min,
                };
                self.visualizer.draw(&mut canvas);

                let playing = self.visualizer.animation().is_playing();
                let mut clicked = Vec::new();
                for button in Button::ALL {
                    let rect = self.mapper.layout().button_rect(button);
                    let rect = egui::Rect::from_min_size(
                        area.min + egui::vec2(rect.x, rect.y),
                        egui::vec2(rect.width, rect.height),
                    );
                    let text = egui::RichText::new(button.label(playing)).size(BUTTON_TEXT_SIZE);
                    if ui.put(rect, egui::Button::new(text)).clicked() {
                        clicked.push(button);
                    }
                }
                for button in clicked {
                    self.handle(InputEvent::ButtonClicked(button));
                }

                let keys: Vec<Key> = ctx.input(|i| {
                    KEY_BINDINGS
                        .iter()
                        .filter(|(egui_key, _)| i.key_pressed(*egui_key))
                        .map(|&(_, key)| key)
                        .collect()
                });
                for key in keys {
                    self.handle(InputEvent::KeyPressed(key));
                }
            });

        ctx.request_repaint_after(Duration::from_secs_f32(1.0 / TARGET_FPS));
    }
}

/// Issues the visualizer's draw calls to an egui painter
struct PainterCanvas<'p> {
    painter: &'p egui::Painter,
    origin: egui::Pos2,
}

impl<'p> PainterCanvas<'p> {
    fn pos(&self, point: Point) -> egui::Pos2 {
        self.origin + egui::vec2(point.x, point.y)
    }
}

impl<'p> Canvas for PainterCanvas<'p> {
    fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        self.painter.line_segment(
            [self.pos(from), self.pos(to)],
            egui::Stroke::new(thickness, color32(color)),
        );
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.painter
            .circle_filled(self.pos(center), radius, color32(color));
    }
}

fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
