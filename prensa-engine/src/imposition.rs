//! Sheet Imposition Calculator
//!
//! Answers "how many pieces fit on a sheet, and how many sheets does the
//! run take". Pieces are placed in a rectangular grid, all in the same
//! orientation; the calculator tries the art both ways and keeps whichever
//! yields more. No partial placement and no mixed orientations: that is a
//! cutting-table constraint, not a solver shortcut.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A print run to lay out on sheets
///
/// All dimensions in centimeters. Defaults describe the house 33x48 super
/// A3 sheet with a 5x5 sticker and a 1cm gripper margin per edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetJob {
    pub sheet_width_cm: Decimal,
    pub sheet_height_cm: Decimal,
    pub art_width_cm: Decimal,
    pub art_height_cm: Decimal,
    /// Unprintable border on every edge
    pub margin_cm: Decimal,
    /// Pieces the customer ordered
    pub target_quantity: u32,
}

impl Default for SheetJob {
    fn default() -> Self {
        Self {
            sheet_width_cm: Decimal::from(33),
            sheet_height_cm: Decimal::from(48),
            art_width_cm: Decimal::from(5),
            art_height_cm: Decimal::from(5),
            margin_cm: Decimal::ONE,
            target_quantity: 100,
        }
    }
}

/// Result of laying a job out
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImpositionResult {
    /// Printable area after margins, per axis
    pub usable_width: Decimal,
    pub usable_height: Decimal,
    /// Pieces per sheet with the art as drawn
    pub fit_normal: u32,
    /// Pieces per sheet with the art turned 90 degrees
    pub fit_rotated: u32,
    /// Better of the two orientations
    pub best_fit: u32,
    /// Whether the winning layout turns the art (ties stay normal)
    pub rotated: bool,
    /// Sheets to cover the target quantity
    pub sheets_needed: u32,
    /// Pieces those sheets actually yield, overrun included
    pub total_arts_produced: u32,
    /// False when not a single piece fits
    pub fits: bool,
}

/// Pieces per sheet for one orientation, grid placement
fn grid_fit(usable_w: Decimal, usable_h: Decimal, art_w: Decimal, art_h: Decimal) -> u32 {
    if art_w <= Decimal::ZERO || art_h <= Decimal::ZERO {
        return 0;
    }
    let across = (usable_w / art_w).floor().to_u32().unwrap_or(0);
    let down = (usable_h / art_h).floor().to_u32().unwrap_or(0);
    across.saturating_mul(down)
}

/// Lay the job out and count sheets
pub fn impose(job: &SheetJob) -> ImpositionResult {
    let usable_width = (job.sheet_width_cm - job.margin_cm * Decimal::TWO).max(Decimal::ZERO);
    let usable_height = (job.sheet_height_cm - job.margin_cm * Decimal::TWO).max(Decimal::ZERO);

    let fit_normal = grid_fit(usable_width, usable_height, job.art_width_cm, job.art_height_cm);
    let fit_rotated = grid_fit(usable_width, usable_height, job.art_height_cm, job.art_width_cm);

    let best_fit = fit_normal.max(fit_rotated);
    let rotated = fit_rotated > fit_normal;
    let fits = best_fit > 0;

    let sheets_needed = if fits {
        job.target_quantity.div_ceil(best_fit)
    } else {
        0
    };

    ImpositionResult {
        usable_width,
        usable_height,
        fit_normal,
        fit_rotated,
        best_fit,
        rotated,
        sheets_needed,
        total_arts_produced: sheets_needed.saturating_mul(best_fit),
        fits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_job_layout() {
        // 33x48 sheet, 1cm margins -> 31x46 usable; 5x5 art -> 6 x 9 = 54
        let result = impose(&SheetJob::default());
        assert_eq!(result.usable_width, Decimal::from(31));
        assert_eq!(result.usable_height, Decimal::from(46));
        assert_eq!(result.best_fit, 54);
        assert!(!result.rotated);
        // 100 pieces / 54 per sheet -> 2 sheets, 108 produced
        assert_eq!(result.sheets_needed, 2);
        assert_eq!(result.total_arts_produced, 108);
        assert!(result.fits);
    }

    #[test]
    fn test_rotation_wins_when_strictly_better() {
        // 31x46 usable, 16x3 art: normal 1x15=15, rotated 10x2=20
        let strip = SheetJob {
            art_width_cm: Decimal::from(16),
            art_height_cm: Decimal::from(3),
            ..SheetJob::default()
        };
        let result = impose(&strip);
        assert_eq!(result.fit_normal, 15);
        assert_eq!(result.fit_rotated, 20);
        assert!(result.rotated);
        assert_eq!(result.best_fit, 20);

        // 20x30 usable, 12x7 art: normal 1x4=4, rotated 2x2=4 is a tie
        let square_ish = SheetJob {
            sheet_width_cm: Decimal::from(22),
            sheet_height_cm: Decimal::from(32),
            art_width_cm: Decimal::from(12),
            art_height_cm: Decimal::from(7),
            ..SheetJob::default()
        };
        let result = impose(&square_ish);
        assert_eq!(result.fit_normal, result.fit_rotated);
        assert!(!result.rotated, "ties report the normal orientation");
    }

    #[test]
    fn test_square_art_never_reports_rotated() {
        let result = impose(&SheetJob::default());
        assert_eq!(result.fit_normal, result.fit_rotated);
        assert!(!result.rotated);
    }

    #[test]
    fn test_art_larger_than_sheet_does_not_fit() {
        let oversized = SheetJob {
            sheet_width_cm: Decimal::from(30),
            sheet_height_cm: Decimal::from(30),
            art_width_cm: Decimal::from(100),
            art_height_cm: Decimal::from(100),
            ..SheetJob::default()
        };
        let result = impose(&oversized);
        assert!(!result.fits);
        assert_eq!(result.best_fit, 0);
        assert_eq!(result.sheets_needed, 0);
        assert_eq!(result.total_arts_produced, 0);
    }

    #[test]
    fn test_margin_can_consume_the_sheet() {
        let all_margin = SheetJob {
            sheet_width_cm: Decimal::from(10),
            sheet_height_cm: Decimal::from(10),
            margin_cm: Decimal::from(6),
            ..SheetJob::default()
        };
        let result = impose(&all_margin);
        assert_eq!(result.usable_width, Decimal::ZERO);
        assert_eq!(result.usable_height, Decimal::ZERO);
        assert!(!result.fits);
    }

    #[test]
    fn test_zero_target_needs_no_sheets() {
        let idle = SheetJob {
            target_quantity: 0,
            ..SheetJob::default()
        };
        let result = impose(&idle);
        assert!(result.fits);
        assert_eq!(result.sheets_needed, 0);
        assert_eq!(result.total_arts_produced, 0);
    }

    #[test]
    fn test_zero_art_dimension_does_not_divide() {
        let degenerate = SheetJob {
            art_width_cm: Decimal::ZERO,
            ..SheetJob::default()
        };
        let result = impose(&degenerate);
        assert!(!result.fits);
        assert_eq!(result.best_fit, 0);
    }

    #[test]
    fn test_fractional_dimensions() {
        // 31x46 usable, 4.5x4.5 art: floor(31/4.5)=6, floor(46/4.5)=10 -> 60
        let job = SheetJob {
            art_width_cm: Decimal::new(45, 1),
            art_height_cm: Decimal::new(45, 1),
            ..SheetJob::default()
        };
        assert_eq!(impose(&job).best_fit, 60);
    }
}
