use anyhow::{Context as _, Result};
use minefield_core::{BoardGeometry, BoardView, CellView, Coord2};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::utils::js_error;

const HIDDEN_FILL: &str = "#b2d8b2";
const REVEALED_FILL: &str = "#e0ffe0";
const TRIGGERED_FILL: &str = "#ff8a80";
const GRID_STROKE: &str = "#2db400";
const FLAG_FILL: &str = "#ff5252";
const FLAG_TEXT: &str = "#fff";
const MINE_TEXT: &str = "#333";
const FLAG_RADIUS: f64 = 10.0;

/// Digit colours for 1 through 8.
const NUMBER_COLORS: [&str; 8] = [
    "#0000ff", "#008000", "#ff0000", "#000080", "#800000", "#008080", "#000000", "#808080",
];

pub(crate) fn number_color(count: u8) -> &'static str {
    let index = usize::from(count.clamp(1, 8) - 1);
    NUMBER_COLORS[index]
}

pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(js_error)?
        .context("canvas has no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("2d context has unexpected type"))
}

/// Draws one full frame of the board.
pub(crate) struct Painter<'a> {
    ctx: &'a CanvasRenderingContext2d,
    geometry: BoardGeometry,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(ctx: &'a CanvasRenderingContext2d, geometry: BoardGeometry) -> Self {
        Self { ctx, geometry }
    }

    pub(crate) fn draw(&self, view: &BoardView) -> Result<()> {
        let (width, height) = self.geometry.pixel_size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");

        for (coords, cell) in view.iter() {
            let triggered = view.triggered_mine == Some(coords);
            self.draw_cell(coords, cell, triggered)?;
        }
        Ok(())
    }

    fn draw_cell(&self, coords: Coord2, cell: CellView, triggered: bool) -> Result<()> {
        let size = self.geometry.cell_size;
        let (x, y) = self.geometry.cell_origin(coords);
        let (cx, cy) = (x + size / 2.0, y + size / 2.0);

        let fill = match cell {
            CellView::Hidden | CellView::Flagged => HIDDEN_FILL,
            _ if triggered => TRIGGERED_FILL,
            _ => REVEALED_FILL,
        };
        self.ctx.set_fill_style_str(fill);
        self.ctx.set_stroke_style_str(GRID_STROKE);
        self.ctx.set_line_width(2.0);
        self.ctx.fill_rect(x, y, size, size);
        self.ctx.stroke_rect(x, y, size, size);

        match cell {
            CellView::Hidden | CellView::RevealedEmpty => {}
            CellView::Flagged => {
                self.ctx.set_fill_style_str(FLAG_FILL);
                self.ctx.begin_path();
                self.ctx
                    .arc(cx, cy, FLAG_RADIUS, 0.0, std::f64::consts::TAU)
                    .map_err(js_error)?;
                self.ctx.fill();
                self.text("⚑", FLAG_TEXT, "bold 14px sans-serif", cx, cy)?;
            }
            CellView::RevealedNumber(count) => {
                let label = count.to_string();
                self.text(&label, number_color(count), "bold 20px sans-serif", cx, cy + 2.0)?;
            }
            CellView::RevealedMine => {
                self.text("💣", MINE_TEXT, "bold 22px sans-serif", cx, cy + 2.0)?;
            }
        }
        Ok(())
    }

    fn text(&self, text: &str, color: &str, font: &str, x: f64, y: f64) -> Result<()> {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.fill_text(text, x, y).map_err(js_error)
    }
}
