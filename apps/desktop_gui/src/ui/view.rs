//! The counter window: readout, two buttons and the help line.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use eframe::egui;

use crate::controller::events::ButtonPress;
use crate::ui::theme::{apply_counter_style, DisplayTone, ViewConfig, HELP_TEXT_COLOR};

type Listener = Rc<dyn Fn()>;

/// Draws whatever count it was last told about and reports button presses
/// to the listeners registered on it. It never reads the model itself.
pub struct ClickCounterView {
    config: ViewConfig,
    readout: RefCell<String>,
    tone: Cell<DisplayTone>,
    click_listener: RefCell<Option<Listener>>,
    reset_listener: RefCell<Option<Listener>>,
}

impl ClickCounterView {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            readout: RefCell::new("0".to_string()),
            tone: Cell::new(DisplayTone::Neutral),
            click_listener: RefCell::new(None),
            reset_listener: RefCell::new(None),
        }
    }

    /// Replaces any previously registered click listener.
    pub fn set_click_listener(&self, callback: impl Fn() + 'static) {
        *self.click_listener.borrow_mut() = Some(Rc::new(callback));
    }

    /// Replaces any previously registered reset listener.
    pub fn set_reset_listener(&self, callback: impl Fn() + 'static) {
        *self.reset_listener.borrow_mut() = Some(Rc::new(callback));
    }

    pub fn update_display(&self, count: u64) {
        *self.readout.borrow_mut() = count.to_string();
        self.tone.set(DisplayTone::for_count(count));
    }

    #[cfg(test)]
    pub(crate) fn readout(&self) -> String {
        self.readout.borrow().clone()
    }

    #[cfg(test)]
    pub(crate) fn tone(&self) -> DisplayTone {
        self.tone.get()
    }

    pub(crate) fn on_click_pressed(&self) {
        self.dispatch(ButtonPress::Click);
    }

    pub(crate) fn on_reset_pressed(&self) {
        self.dispatch(ButtonPress::Reset);
    }

    fn dispatch(&self, press: ButtonPress) {
        // Clone out of the slot first: the listener ends up in `update_display`.
        let listener = match press {
            ButtonPress::Click => self.click_listener.borrow().clone(),
            ButtonPress::Reset => self.reset_listener.borrow().clone(),
        };
        match listener {
            Some(listener) => listener(),
            None => tracing::debug!(button = press.label(), "press ignored, no listener set"),
        }
    }

    /// Draws one frame, then forwards any press detected while drawing.
    pub fn show(&self, ctx: &egui::Context) {
        let mut pressed = None;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::central_panel(&ctx.style())
                    .inner_margin(egui::Margin::same(self.config.outer_padding)),
            )
            .show(ctx, |ui| {
                pressed = self.draw(ui);
            });

        match pressed {
            Some(ButtonPress::Click) => self.on_click_pressed(),
            Some(ButtonPress::Reset) => self.on_reset_pressed(),
            None => {}
        }
    }

    fn draw(&self, ui: &mut egui::Ui) -> Option<ButtonPress> {
        let config = &self.config;
        let mut pressed = None;

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(config.heading)
                    .size(config.heading_size)
                    .strong(),
            );
            ui.add_space(8.0);

            egui::Frame::NONE
                .stroke(egui::Stroke::new(
                    config.display_border_width,
                    ui.visuals().widgets.noninteractive.bg_stroke.color,
                ))
                .inner_margin(egui::Margin::symmetric(20, 6))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(self.readout.borrow().as_str())
                                .size(config.readout_size)
                                .strong()
                                .color(self.tone.get().color()),
                        );
                    });
                });

            ui.add_space(12.0);

            let button_size = egui::vec2(config.button_size[0], config.button_size[1]);
            ui.horizontal(|ui| {
                let row_width = button_size.x * 2.0 + config.button_gap;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                ui.spacing_mut().item_spacing.x = config.button_gap;

                let click = egui::Button::new(
                    egui::RichText::new(config.click_label)
                        .size(config.button_text_size)
                        .strong(),
                )
                .min_size(button_size);
                if ui.add(click).clicked() {
                    pressed = Some(ButtonPress::Click);
                }

                let reset = egui::Button::new(
                    egui::RichText::new(config.reset_label).size(config.button_text_size),
                )
                .min_size(button_size);
                if ui.add(reset).clicked() {
                    pressed = Some(ButtonPress::Reset);
                }
            });

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(config.help_text)
                    .size(config.help_text_size)
                    .color(HELP_TEXT_COLOR),
            );
        });

        pressed
    }

    /// Opens the window and blocks until it is closed.
    pub fn run(self: &Rc<Self>) -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.config.window_title)
                .with_inner_size(self.config.window_size)
                .with_resizable(false),
            centered: true,
            ..Default::default()
        };

        let view = Rc::clone(self);
        eframe::run_native(
            self.config.app_id,
            options,
            Box::new(move |cc| {
                apply_counter_style(&cc.egui_ctx);
                Ok(Box::new(CounterWindow { view }))
            }),
        )
    }
}

struct CounterWindow {
    view: Rc<ClickCounterView>,
}

impl eframe::App for CounterWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.view.show(ctx);
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
