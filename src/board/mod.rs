//! Browser front end.
//!
//! Owns the running game in a thread-local slot and routes every DOM event and
//! timer callback into the `GameController`, redrawing after each one. All
//! state changes happen inside one borrow per event; no callback re-enters
//! another.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::game::GameController;
use crate::{GameConfig, KupuError, SimpleRng, WordDictionary};

mod ports;
mod render;

use ports::{BrowserTimers, HtmlAudio, LocalStore};
use render::View;

type BrowserGame = GameController<LocalStore, HtmlAudio, BrowserTimers>;

const LEAVE_PROMPT: &str = "Ka kite anō";

struct Board {
    game: BrowserGame,
    view: View,
}

thread_local! {
    static BOARD: RefCell<Option<Board>> = const { RefCell::new(None) };
}

/// Run `f` against the live board and redraw. Silently skipped before the
/// board exists.
fn with_board(f: impl FnOnce(&mut Board)) {
    BOARD.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => {
            if let Some(board) = slot.as_mut() {
                f(board);
                board.view.draw(&board.game);
            }
        }
        Err(_) => log::error!("board event re-entered while busy"),
    });
}

fn on_tick() {
    with_board(|b| b.game.on_tick());
}

fn on_removal_due() {
    with_board(|b| b.game.on_removal_due());
}

fn on_submit() {
    with_board(|b| {
        b.game.submit();
    });
}

fn on_toggle_pause() {
    with_board(|b| {
        if let Err(err) = b.game.toggle_pause() {
            log::error!("could not resume: {err}");
        }
    });
}

fn on_toggle_mute() {
    with_board(|b| b.game.toggle_mute());
}

fn on_new_game() {
    if let Err(err) = reload_page() {
        log::error!("reload failed: {err:?}");
    }
}

fn seed_rng() -> Result<SimpleRng, KupuError> {
    #[cfg(feature = "rng")]
    {
        SimpleRng::from_entropy()
    }
    #[cfg(not(feature = "rng"))]
    {
        let now = window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Ok(SimpleRng::new(now as u32))
    }
}

pub fn start_board(config: GameConfig, dictionary: WordDictionary) -> Result<(), JsValue> {
    let win = window().ok_or(KupuError::Browser("window"))?;
    let doc = win.document().ok_or(KupuError::Browser("document"))?;

    let view = View::mount(&doc)?;
    let store = LocalStore::open(&win);
    let timers = BrowserTimers::new(win.clone(), on_tick, on_removal_due);
    let game = GameController::new(
        config,
        dictionary,
        store,
        HtmlAudio::load(),
        timers,
        seed_rng()?,
    );

    view.add_button("kupu-submit", "✓", on_submit)?;
    view.add_button("kupu-pause", "▶", on_toggle_pause)?;
    view.add_button("kupu-mute", "🔊", on_toggle_mute)?;
    view.add_button("kupu-new", "↻", on_new_game)?;

    // Cell clicks
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let x = evt.offset_x() as f64;
            let y = evt.offset_y() as f64;
            with_board(|b| {
                // The grid is hidden while paused.
                if b.game.is_paused() {
                    return;
                }
                let n = b.game.grid().size();
                if let Some(pos) = b.view.hit_test(x, y, n) {
                    b.game.click(pos);
                }
            });
        }) as Box<dyn FnMut(_)>);
        view.canvas()
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyboard: Enter submits, Backspace drops the last cell, Space pauses/resumes.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            match evt.key().as_str() {
                "Enter" => {
                    evt.prevent_default();
                    on_submit();
                }
                "Backspace" => {
                    evt.prevent_default();
                    with_board(|b| {
                        if let Some(last) = b.game.path().entries().last().copied() {
                            b.game.click(last.position);
                        }
                    });
                }
                " " => {
                    evt.prevent_default();
                    on_toggle_pause();
                }
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Losing focus pauses; the player resumes explicitly.
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            with_board(|b| b.game.on_focus_lost());
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::BeforeUnloadEvent| {
            evt.prevent_default();
            evt.set_return_value(LEAVE_PROMPT);
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    view.draw(&game);
    BOARD.with(|cell| *cell.borrow_mut() = Some(Board { game, view }));
    log::info!("kupu board ready");
    Ok(())
}

pub fn reload_page() -> Result<(), JsValue> {
    let win = window().ok_or(KupuError::Browser("window"))?;
    win.location().reload()
}
