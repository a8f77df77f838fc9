//! Orders table panel.
//!
//! Typora-like table styling: clean borders, light header background,
//! minimal chrome.

use egui::{Color32, Frame, InnerResponse, Margin, Response, ScrollArea, Stroke, Ui};
use orders_business::{BusinessConfig, OrdersPage, OrdersPageState, table};

use super::api;

/// Border color (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Helper to create a header cell with background.
fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Helper to create a data cell with padding.
fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Kick off a page fetch unless one is already in flight.
///
/// The guard runs synchronously on the UI thread, so rapid repeated triggers
/// collapse into a single request.
pub fn trigger_fetch(state: &mut OrdersPageState, config: &BusinessConfig, ctx: &egui::Context) {
    if !state.begin_fetch() {
        return;
    }
    api::fetch_orders_page(&config.send_url(), state.cursor(), ctx.clone());
}

/// Apply async fetch results delivered through the egui temp memory.
///
/// Call once per frame, before rendering. Results are applied even when the
/// user has moved on; an in-flight request is never cancelled.
pub fn poll_orders_responses(state: &mut OrdersPageState, ctx: &egui::Context) {
    if let Some(page) = ctx.memory(|mem| {
        mem.data
            .get_temp::<OrdersPage>(egui::Id::new(api::PAGE_RESPONSE_ID))
    }) {
        state.apply_page(page);
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<OrdersPage>(egui::Id::new(api::PAGE_RESPONSE_ID));
        });
    }

    if let Some(error) = ctx.memory(|mem| {
        mem.data
            .get_temp::<String>(egui::Id::new(api::FETCH_ERROR_ID))
    }) {
        state.apply_error(error);
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new(api::FETCH_ERROR_ID));
        });
    }
}

/// Displays the orders table with its loading, error and empty states and
/// the Load More affordance.
pub fn orders_table(state: &mut OrdersPageState, config: &BusinessConfig, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        // A failed fetch never discards already-loaded rows, so the error is
        // a banner above the table rather than a replacement for it.
        if let Some(error) = state.error() {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
            ui.add_space(4.0);
        }

        if state.rows().is_empty() {
            if state.loading() {
                loading_indicator(ui);
            } else if state.error().is_none() {
                ui.label("No data available");
            }
        } else {
            let columns = table::columns(state.rows());

            Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .inner_margin(Margin::ZERO)
                .show(ui, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        egui::Grid::new("orders_table")
                            .num_columns(columns.len())
                            .striped(true)
                            .spacing([16.0, 0.0])
                            .min_col_width(60.0)
                            .show(ui, |ui| {
                                for column in &columns {
                                    header_cell(ui, |ui| {
                                        ui.strong(table::header_label(column));
                                    });
                                }
                                ui.end_row();

                                for row in state.rows() {
                                    for column in &columns {
                                        data_cell(ui, |ui| {
                                            ui.label(table::cell_text(column, row));
                                        });
                                    }
                                    ui.end_row();
                                }
                            });
                    });
                });

            ui.add_space(8.0);

            if state.is_fetching() {
                loading_indicator(ui);
            } else if state.can_load_more() && ui.button("Load More").clicked() {
                let ctx = ui.ctx().clone();
                trigger_fetch(state, config, &ctx);
            }
        }
    })
    .response
}

fn loading_indicator(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label("Loading...");
    });
}
