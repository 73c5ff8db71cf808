//! Relay between the counter model and the counter window.

use std::rc::Rc;

use counter_model::{ClickCounterModel, ModelError, Observer};

use crate::controller::events::ButtonPress;
use crate::ui::ClickCounterView;

/// Turns button presses into model mutations and pushes every model change
/// back to the view. Neither side knows about the other.
pub struct ClickCounterController {
    model: Rc<ClickCounterModel>,
    view: Rc<ClickCounterView>,
}

impl ClickCounterController {
    /// Wires the view listeners, subscribes to the model and syncs the view
    /// with the model's current count.
    pub fn new(
        model: Rc<ClickCounterModel>,
        view: Rc<ClickCounterView>,
    ) -> Result<Rc<Self>, ModelError> {
        let controller = Rc::new(Self { model, view });

        let on_click = Rc::downgrade(&controller);
        controller.view.set_click_listener(move || {
            if let Some(controller) = on_click.upgrade() {
                controller.handle_press(ButtonPress::Click);
            }
        });
        let on_reset = Rc::downgrade(&controller);
        controller.view.set_reset_listener(move || {
            if let Some(controller) = on_reset.upgrade() {
                controller.handle_press(ButtonPress::Reset);
            }
        });

        controller.model.subscribe(&controller)?;
        controller.update();

        Ok(controller)
    }

    fn handle_press(&self, press: ButtonPress) {
        tracing::info!(button = press.label(), "button pressed");
        match press {
            ButtonPress::Click => self.model.increment(),
            ButtonPress::Reset => self.model.reset(),
        }
    }

    /// Blocks on the window's event loop; returns once the window is closed.
    pub fn run(&self) -> eframe::Result<()> {
        tracing::info!("entering event loop");
        let result = self.view.run();
        tracing::info!(count = self.model.get_count(), "window closed");
        result
    }
}

impl Observer for ClickCounterController {
    fn update(&self) {
        let count = self.model.get_count();
        tracing::info!(count, "updating view");
        self.view.update_display(count);
    }
}

#[cfg(test)]
#[path = "tests/counter_tests.rs"]
mod tests;
