//! Text ring chart of category shares.

use std::f64::consts::{FRAC_PI_2, TAU};

use colored::{Color, Colorize};
use rust_decimal::prelude::ToPrimitive;

use crate::core::services::CategoryShare;

const GLYPHS: [char; 8] = ['#', '*', '+', 'o', '=', '%', '@', '~'];
const COLORS: [Color; 8] = [
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightYellow,
    Color::BrightGreen,
    Color::BrightRed,
    Color::White,
    Color::Blue,
];
/// Inner radius as a fraction of the outer one.
const HOLE: f64 = 0.5;

/// Glyph used for the share at `index`; wraps after eight categories.
pub fn glyph(index: usize) -> char {
    GLYPHS[index % GLYPHS.len()]
}

/// Draws a donut of `radius` rows above and below the centre. Slices start
/// at twelve o'clock and run counter-clockwise in `shares` order.
pub fn render_ring(shares: &[CategoryShare], radius: usize, colored: bool) -> Vec<String> {
    let amounts: Vec<f64> = shares
        .iter()
        .map(|share| share.amount.to_f64().unwrap_or(0.0).max(0.0))
        .collect();
    let total: f64 = amounts.iter().sum();
    if total <= 0.0 || radius == 0 {
        return Vec::new();
    }

    let mut boundaries = Vec::with_capacity(amounts.len());
    let mut running = 0.0;
    for amount in &amounts {
        running += amount / total;
        boundaries.push(running);
    }

    let outer = radius as f64 + 0.5;
    let inner = radius as f64 * HOLE;
    let span = radius as i64;
    let mut lines = Vec::with_capacity(2 * radius + 1);
    for row in -span..=span {
        let mut line = String::new();
        for col in -2 * span..=2 * span {
            // Terminal cells are about twice as tall as they are wide.
            let x = col as f64 / 2.0;
            let y = -(row as f64);
            let distance = x.hypot(y);
            if distance > outer || distance < inner {
                line.push(' ');
                continue;
            }
            let angle = (y.atan2(x) - FRAC_PI_2).rem_euclid(TAU) / TAU;
            let index = boundaries
                .iter()
                .position(|bound| angle < *bound)
                .unwrap_or(boundaries.len() - 1);
            let ch = glyph(index);
            if colored {
                let color = COLORS[index % COLORS.len()];
                line.push_str(&ch.to_string().color(color).to_string());
            } else {
                line.push(ch);
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}
