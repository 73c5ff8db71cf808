use std::rc::Rc;

mod controller;
mod ui;

use controller::ClickCounterController;
use counter_model::ClickCounterModel;
use ui::{ClickCounterView, ViewConfig};

fn log_startup_banner() {
    tracing::info!("click counter application (MVC pattern)");
    tracing::info!("model: ClickCounterModel holds the count");
    tracing::info!("view: ClickCounterView draws the window");
    tracing::info!("controller: ClickCounterController connects model and view");
    tracing::info!("observer: controller is notified after every model change");
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    log_startup_banner();

    let model = Rc::new(ClickCounterModel::new());
    let view = Rc::new(ClickCounterView::new(ViewConfig::default()));
    let controller = ClickCounterController::new(model, view)
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    controller.run()
}
