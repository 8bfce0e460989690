//! Shopping-list aggregation and report generation

use std::path::PathBuf;

use actix_web::web;
use tracing::{info, warn};

use foodgram_common::FoodgramError;
use foodgram_persistence::{IngredientLedger, ShoppingListRow};
use foodgram_report::{ReportDocument, ReportLine, render_shopping_list};

use crate::metrics;

/// Sum the ingredients of every recipe in the user's shopping cart.
pub async fn aggregate_shopping_list<L>(
    ledger: &L,
    user_id: i32,
) -> Result<Vec<ShoppingListRow>, FoodgramError>
where
    L: IngredientLedger + ?Sized,
{
    ledger
        .sum_ingredients_for_cart(user_id)
        .await
        .map_err(|e| {
            warn!(user_id, "Shopping list aggregation failed: {:#}", e);
            FoodgramError::aggregation(e)
        })
}

fn report_lines(rows: Vec<ShoppingListRow>) -> Vec<ReportLine> {
    rows.into_iter()
        .map(|row| ReportLine::new(row.ingredient_name, row.total_amount, row.measurement_unit))
        .collect()
}

/// Aggregate the user's cart and render it as a PDF document.
///
/// Rendering runs on the blocking thread pool. Nothing is returned unless
/// the whole document was produced.
pub async fn build_shopping_list_report<L>(
    ledger: &L,
    font_path: PathBuf,
    user_id: i32,
) -> Result<ReportDocument, FoodgramError>
where
    L: IngredientLedger + ?Sized,
{
    let timer = metrics::Timer::new();

    let rows = aggregate_shopping_list(ledger, user_id)
        .await
        .inspect_err(|_| metrics::record_shopping_list_failure("aggregate"))?;
    let row_count = rows.len();
    let lines = report_lines(rows);

    let document = web::block(move || render_shopping_list(font_path, lines))
        .await
        .map_err(|e| FoodgramError::RenderFailed(e.to_string()))
        .and_then(|rendered| rendered)
        .inspect_err(|e| {
            warn!(user_id, "Shopping list rendering failed: {}", e);
            metrics::record_shopping_list_failure("render");
        })?;

    metrics::record_shopping_list_render(row_count, timer.elapsed_secs());
    info!(
        user_id,
        rows = row_count,
        size = document.len(),
        "Shopping list report generated"
    );

    Ok(document)
}
