use crate::{state::State, widgets};

/// Top-level eframe app: a single orders table view.
pub struct OrdersApp {
    pub state: State,
    /// Whether the startup fetch has been issued.
    started: bool,
}

impl OrdersApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            started: false,
        }
    }
}

impl eframe::App for OrdersApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply any fetch results that arrived since the last frame.
        widgets::poll_orders_responses(&mut self.state.orders, ctx);

        // One fetch at startup; afterwards only the Load More button fetches.
        // Never re-fetch on cursor changes, or an exhausted sequence would
        // loop forever.
        if !self.started {
            self.started = true;
            widgets::trigger_fetch(&mut self.state.orders, &self.state.config, ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Orders Table");
            ui.separator();
            widgets::orders_table(&mut self.state.orders, &self.state.config, ui);
        });
    }
}
