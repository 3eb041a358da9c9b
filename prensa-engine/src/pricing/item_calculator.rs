//! Line item pricing
//!
//! One entry point per representation: [`calculate_item_total`] for raw
//! figures, [`price_line_item`] to turn a validated draft into the line
//! stored on a quotation.

use rust_decimal::Decimal;
use shared::models::PricingMode;
use shared::quote::{LineItemDraft, PricedLineItem};
use shared::util::new_doc_id;

use crate::money::round_money;

/// Square centimeters per square meter
const CM2_PER_M2: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Pieces per milheiro
const PIECES_PER_MILHEIRO: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Compute a line total from raw figures
///
/// - `Unit`: price times quantity
/// - `Area`: piece area in m² (from cm dimensions) times the m² price,
///   times quantity; missing dimensions price as zero area
/// - `Milheiro`: quantity divided by 1000, times the per-thousand price,
///   so partial thousands charge proportionally
///
/// Rounds to cents once, at the end.
pub fn calculate_item_total(
    mode: PricingMode,
    unit_price: Decimal,
    width_cm: Option<Decimal>,
    height_cm: Option<Decimal>,
    quantity: u32,
) -> Decimal {
    let quantity = Decimal::from(quantity);

    let raw = match mode {
        PricingMode::Unit => unit_price * quantity,
        PricingMode::Area => {
            let width = width_cm.unwrap_or(Decimal::ZERO);
            let height = height_cm.unwrap_or(Decimal::ZERO);
            let area_m2 = width * height / CM2_PER_M2;
            area_m2 * unit_price * quantity
        }
        PricingMode::Milheiro => quantity / PIECES_PER_MILHEIRO * unit_price,
    };

    round_money(raw)
}

/// Price a draft into a quotation line
///
/// Allocates the line id; the draft should have passed
/// [`crate::money::validate_line_item`] first.
pub fn price_line_item(draft: &LineItemDraft) -> PricedLineItem {
    let total = calculate_item_total(
        draft.mode,
        draft.unit_price,
        draft.width_cm,
        draft.height_cm,
        draft.quantity,
    );

    PricedLineItem {
        id: new_doc_id(),
        product_id: draft.product_id.clone(),
        name: draft.name.clone(),
        mode: draft.mode,
        unit_price: draft.unit_price,
        width_cm: draft.width_cm,
        height_cm: draft.height_cm,
        quantity: draft.quantity,
        total,
        production_time: draft.production_time.clone(),
    }
}
