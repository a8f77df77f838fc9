//! API call for the paginated orders endpoint.

use orders_business::{Cursor, FetchError, parse_page};

/// Temp-memory slot for a successfully parsed page.
pub(crate) const PAGE_RESPONSE_ID: &str = "orders_page_response";
/// Temp-memory slot for a user-facing fetch error message.
pub(crate) const FETCH_ERROR_ID: &str = "orders_fetch_error";

/// Fetch one page of orders.
///
/// The response is parsed off the UI thread and the outcome is handed back
/// through the egui temp memory; `poll_orders_responses` applies it on the
/// next frame. The request always runs to completion, so exactly one of the
/// two slots gets written per call.
pub fn fetch_orders_page(send_url: &str, cursor: Option<&Cursor>, ctx: egui::Context) {
    // The cursor is an opaque token: echoed back percent-encoded, omitted
    // entirely before the first page.
    let url = match cursor {
        Some(cursor) => format!(
            "{send_url}?cursor={}",
            urlencoding::encode(cursor.as_str())
        ),
        None => send_url.to_owned(),
    };
    log::info!("fetching orders page: {url}");
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        let outcome = match result {
            Ok(response) if response.status == 200 => parse_page(&response.bytes),
            Ok(response) => Err(FetchError::status(response.status)),
            Err(err) => Err(FetchError::transport(err)),
        };
        match outcome {
            Ok(page) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(egui::Id::new(PAGE_RESPONSE_ID), page);
                });
            }
            Err(err) => {
                log::error!("orders fetch failed: {err}");
                ctx.memory_mut(|mem| {
                    mem.data
                        .insert_temp(egui::Id::new(FETCH_ERROR_ID), err.to_string());
                });
            }
        }
    });
}
