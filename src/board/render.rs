// Canvas grid + DOM HUD rendering.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::game::GameController;
use crate::{AudioSink, KeyValueStore, Position, Timers, format_time};

const CANVAS_PX: u32 = 600;

const HUD_HTML: &str = "\
<div style='display:flex; gap:18px; font-size:18px; margin-bottom:6px;'>\
<span id='kupu-score'></span><span id='kupu-high-score'></span><span id='kupu-time'></span>\
</div>\
<div id='kupu-selected' style='font-size:26px; min-height:32px; letter-spacing:1px;'></div>\
<div id='kupu-message' style='min-height:22px;'></div>\
<a id='kupu-link' target='_blank' rel='noopener' style='color:#f6d186; display:none;'>Papakupu</a>\
<div id='kupu-status' style='min-height:22px; color:#f2a541;'></div>\
<div id='kupu-buttons' style='display:flex; gap:8px; margin:8px 0;'></div>\
<div style='opacity:0.7; margin-top:6px;'>Kupu kua kitea</div>\
<div id='kupu-found' style='white-space:pre-line; max-height:340px; overflow-y:auto;'></div>";

pub struct View {
    doc: Document,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl View {
    /// Create (or reuse) the canvas and the HUD panel.
    pub fn mount(doc: &Document) -> Result<Self, JsValue> {
        let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
        let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("kupu-canvas") {
            el.dyn_into()?
        } else {
            let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
            c.set_id("kupu-canvas");
            c.set_width(CANVAS_PX);
            c.set_height(CANVAS_PX);
            c.set_attribute("style", "position:fixed; left:38%; top:50%; transform:translate(-50%,-50%); box-shadow:0 0 32px 0 rgba(0,0,0,0.18); border-radius:18px; border:2px solid #222; background:#181818; z-index:20; cursor:pointer;")?;
            body.append_child(&c)?;
            c
        };
        if doc.get_element_by_id("kupu-hud").is_none() {
            let hud = doc.create_element("div")?;
            hud.set_id("kupu-hud");
            hud.set_attribute("style", "position:fixed; top:50%; left:calc(38% + 330px); transform:translateY(-50%); width:260px; color:#eee; font-family:'Fira Code', monospace; font-size:15px; padding:10px 12px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; z-index:44;")?;
            hud.set_inner_html(HUD_HTML);
            body.append_child(&hud)?;
        }
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        Ok(Self {
            doc: doc.clone(),
            canvas,
            ctx,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Add a HUD button wired to `on_click`.
    pub fn add_button(&self, id: &str, label: &str, on_click: fn()) -> Result<(), JsValue> {
        let Some(bar) = self.doc.get_element_by_id("kupu-buttons") else {
            return Ok(());
        };
        let button = self.doc.create_element("button")?;
        button.set_id(id);
        button.set_text_content(Some(label));
        button.set_attribute("style", "font-size:18px; padding:4px 10px; border-radius:6px; border:1px solid #555; background:#2b2b2b; color:#eee; cursor:pointer;")?;
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            on_click();
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        bar.append_child(&button)?;
        Ok(())
    }

    /// Map canvas-local pixel coordinates to a grid position. Row 0 is drawn
    /// at the bottom so refill cells arrive from the top.
    pub fn hit_test(&self, x: f64, y: f64, n: usize) -> Option<Position> {
        let (cw, ch) = self.cell_size(n);
        if x < 0.0 || y < 0.0 || n == 0 {
            return None;
        }
        let col = (x / cw).floor() as usize;
        let from_top = (y / ch).floor() as usize;
        if col >= n || from_top >= n {
            return None;
        }
        Some(Position::new(col, n - 1 - from_top))
    }

    fn cell_size(&self, n: usize) -> (f64, f64) {
        let n = n.max(1) as f64;
        (
            self.canvas.width() as f64 / n,
            self.canvas.height() as f64 / n,
        )
    }

    fn cell_origin(&self, pos: Position, n: usize) -> (f64, f64) {
        let (cw, ch) = self.cell_size(n);
        (pos.col as f64 * cw, (n - 1 - pos.row) as f64 * ch)
    }

    pub fn draw<S, A, T>(&self, game: &GameController<S, A, T>)
    where
        S: KeyValueStore,
        A: AudioSink,
        T: Timers,
    {
        self.draw_grid(game);
        self.update_hud(game);
    }

    fn draw_grid<S, A, T>(&self, game: &GameController<S, A, T>)
    where
        S: KeyValueStore,
        A: AudioSink,
        T: Timers,
    {
        let ctx = &self.ctx;
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let grid = game.grid();
        let n = grid.size();
        let (cw, ch) = self.cell_size(n);

        ctx.set_fill_style_str("#181818");
        ctx.fill_rect(0.0, 0.0, w, h);

        if game.is_paused() && !game.is_game_over() {
            // The board stays hidden while paused.
            ctx.set_fill_style_str("#eeeeee");
            ctx.set_font("48px 'Fira Code', monospace");
            ctx.fill_text("▶ Tīmata", w / 2.0, h / 2.0).ok();
            return;
        }

        let consuming = game.consuming();
        let path = game.path();
        ctx.set_font(&format!("{}px 'Noto Sans', sans-serif", (ch * 0.42).round()));
        for (col, column) in grid.columns().iter().enumerate() {
            for (row, cell) in column.iter().take(n).enumerate() {
                let pos = Position::new(col, row);
                let (px, py) = self.cell_origin(pos, n);
                let fill = if consuming.iter().any(|e| e.cell.id == cell.id) {
                    "rgba(246,209,134,0.35)"
                } else if path.is_last(pos) {
                    "#f2a541"
                } else if path.contains(pos) {
                    "#f6d186"
                } else {
                    "#2b2b2b"
                };
                ctx.set_fill_style_str(fill);
                ctx.fill_rect(px + 2.0, py + 2.0, cw - 4.0, ch - 4.0);
                ctx.set_fill_style_str(if path.contains(pos) { "#181818" } else { "#eeeeee" });
                ctx.fill_text(cell.text, px + cw / 2.0, py + ch / 2.0).ok();
            }
        }

        // Trace the path through cell centres.
        ctx.set_stroke_style_str("rgba(242,165,65,0.6)");
        ctx.set_line_width(4.0);
        for pair in path.entries().windows(2) {
            let (x1, y1) = self.cell_origin(pair[0].position, n);
            let (x2, y2) = self.cell_origin(pair[1].position, n);
            line(
                ctx,
                x1 + cw / 2.0,
                y1 + ch / 2.0,
                x2 + cw / 2.0,
                y2 + ch / 2.0,
            );
        }

        if game.is_game_over() {
            ctx.set_fill_style_str("rgba(0,0,0,0.55)");
            ctx.fill_rect(0.0, 0.0, w, h);
            ctx.set_fill_style_str("#ffffff");
            ctx.set_font("56px 'Fira Code', monospace");
            ctx.fill_text(crate::game::MSG_GAME_OVER, w / 2.0, h / 2.0).ok();
            ctx.set_font("20px 'Fira Code', monospace");
            ctx.fill_text(&format!("{} piro", game.score()), w / 2.0, h / 2.0 + 48.0)
                .ok();
        }
    }

    fn update_hud<S, A, T>(&self, game: &GameController<S, A, T>)
    where
        S: KeyValueStore,
        A: AudioSink,
        T: Timers,
    {
        self.set_text("kupu-score", &format!("Piro: {}", game.score()));
        self.set_text("kupu-high-score", &format!("Teitei: {}", game.high_score()));
        self.set_text("kupu-time", &format_time(game.time_remaining()));
        self.set_text("kupu-selected", &game.selected_text());
        let messages = game.messages();
        self.set_text("kupu-message", &messages.word);
        self.set_text("kupu-status", &messages.status);
        if let Some(link) = self.doc.get_element_by_id("kupu-link") {
            match &messages.link {
                Some(href) => {
                    link.set_attribute("href", href).ok();
                    link.set_attribute("style", "color:#f6d186; display:inline;").ok();
                }
                None => {
                    link.set_attribute("style", "display:none;").ok();
                }
            }
        }
        let found: Vec<String> = game
            .found_words()
            .iter()
            .rev()
            .map(|w| format!("{}  {}", w.text, w.score))
            .collect();
        self.set_text("kupu-found", &found.join("\n"));
        self.set_text("kupu-pause", if game.is_paused() { "▶" } else { "⏸" });
        self.set_text("kupu-mute", if game.is_muted() { "🔇" } else { "🔊" });
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.doc.get_element_by_id(id)
    }
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}
