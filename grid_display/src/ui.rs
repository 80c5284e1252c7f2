// ui.rs - egui drawing and event translation for the simulator window

use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, Stroke, Vec2};
use std::time::Instant;

use conway::{Frontend, InputEvent, Key, Layout, LoopState, Pacer, PixelRect, PointerButton, Simulation};

const BACKGROUND: Color32 = Color32::WHITE;
const GRID_LINE: Color32 = Color32::from_rgb(128, 128, 128);
const LIVE_CELL: Color32 = Color32::BLACK;
const BUTTON_FILL: Color32 = Color32::from_rgb(0, 255, 0);
const BUTTON_TEXT: Color32 = Color32::BLACK;

/// The eframe application: one simulator and its tick pacer.
pub struct GridDisplay {
    sim: Simulation,
    pacer: Pacer,
    title: String,
}

impl GridDisplay {
    pub fn new(sim: Simulation, pacer: Pacer) -> Self {
        Self {
            sim,
            pacer,
            title: String::new(),
        }
    }
}

impl eframe::App for GridDisplay {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut frontend = EguiFrontend {
            ctx,
            title: &mut self.title,
        };
        if let Some(wait) = conway::frame(&mut self.sim, &mut frontend, &mut self.pacer, Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Borrowed view of the egui context for one repaint.
struct EguiFrontend<'a> {
    ctx: &'a egui::Context,
    title: &'a mut String,
}

impl Frontend for EguiFrontend<'_> {
    fn render(&mut self, sim: &Simulation) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(self.ctx, |ui| paint(ui.painter(), sim));

        let title = window_title(sim);
        if *self.title != title {
            self.ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            *self.title = title;
        }
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.ctx.input(|input| {
            let mut events: Vec<InputEvent> = input.events.iter().filter_map(translate).collect();
            if input.viewport().close_requested() {
                events.push(InputEvent::CloseRequested);
            }
            events
        })
    }

    fn shutdown(&mut self) {
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

pub fn window_title(sim: &Simulation) -> String {
    let status = match sim.state() {
        LoopState::RunningUnpaused => "▶",
        LoopState::RunningPaused => "⏸",
        LoopState::Stopped => "⏹",
    };
    format!(
        "Conway's Game of Life | {status} Gen {} | Pop {}",
        sim.generation(),
        sim.grid().population()
    )
}

/// Map one egui event onto the simulator's input vocabulary.
pub fn translate(event: &egui::Event) -> Option<InputEvent> {
    match event {
        egui::Event::Key { key, pressed: true, repeat: false, .. } => Some(InputEvent::KeyDown(match key {
            egui::Key::Space => Key::Space,
            egui::Key::S => Key::S,
            egui::Key::L => Key::L,
            _ => Key::Other,
        })),
        egui::Event::PointerButton { pos, button, pressed: true, .. } => {
            let button = match button {
                egui::PointerButton::Primary => PointerButton::Primary,
                egui::PointerButton::Secondary => PointerButton::Secondary,
                egui::PointerButton::Middle => PointerButton::Middle,
                _ => return None,
            };
            Some(InputEvent::PointerDown { x: pos.x, y: pos.y, button })
        }
        _ => None,
    }
}

fn to_rect(r: PixelRect) -> Rect {
    Rect::from_min_size(
        egui::pos2(r.x as f32, r.y as f32),
        Vec2::new(r.width as f32, r.height as f32),
    )
}

fn paint(painter: &egui::Painter, sim: &Simulation) {
    let layout = sim.layout();
    draw_grid(painter, layout);
    draw_cells(painter, sim);
    draw_button(painter, layout);
}

fn draw_grid(painter: &egui::Painter, layout: &Layout) {
    for outline in layout.outline_rects() {
        painter.rect_stroke(to_rect(outline), 0.0, Stroke::new(1.0, GRID_LINE));
    }
}

fn draw_cells(painter: &egui::Painter, sim: &Simulation) {
    let layout = sim.layout();
    for (x, y) in sim.grid().live_cells() {
        painter.rect_filled(to_rect(layout.cell_rect(x, y)), 0.0, LIVE_CELL);
    }
}

fn draw_button(painter: &egui::Painter, layout: &Layout) {
    let rect = to_rect(layout.control());
    painter.rect_filled(rect, 0.0, BUTTON_FILL);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Next Generation",
        FontId::proportional(24.0),
        BUTTON_TEXT,
    );
}
