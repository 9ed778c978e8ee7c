//! Browser entry point and loop driver.
//!
//! One `App` owns the game state, the looked-up page elements, and the
//! handle of the currently scheduled tick. Ticks are one-shot timeouts that
//! re-arm themselves, so exactly one tick is ever in flight and a reset can
//! cancel the pending one before starting over.

pub mod game;
pub mod input;
pub mod render;
pub mod storage;

mod rand;

use game::{Game, Phase, Tick};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Everything the host page must provide, looked up by id once at boot.
/// A missing element is a page bug, so lookups throw.
struct PageElements {
    canvas: web_sys::HtmlCanvasElement,
    context: web_sys::CanvasRenderingContext2d,
    score: web_sys::HtmlElement,
    previous_score: web_sys::HtmlElement,
    high_score: web_sys::HtmlElement,
    final_score: web_sys::HtmlElement,
    overlay: web_sys::HtmlElement,
    play_again: web_sys::HtmlElement,
}

impl PageElements {
    fn init() -> Self {
        let document = web_sys::window()
            .unwrap_throw()
            .document()
            .unwrap_throw();
        let by_id = |id: &str| -> web_sys::HtmlElement {
            document
                .get_element_by_id(id)
                .expect_throw(id)
                .dyn_into()
                .unwrap_throw()
        };
        let canvas: web_sys::HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect_throw("game")
            .dyn_into()
            .unwrap_throw();
        canvas.set_width(render::CANVAS_PX as u32);
        canvas.set_height(render::CANVAS_PX as u32);
        let context = canvas
            .get_context("2d")
            .unwrap_throw()
            .unwrap_throw()
            .dyn_into()
            .unwrap_throw();
        PageElements {
            context,
            score: by_id("score"),
            previous_score: by_id("previousScore"),
            high_score: by_id("highScore"),
            final_score: by_id("finalScore"),
            overlay: by_id("gameOverScreen"),
            play_again: by_id("playAgain"),
            canvas,
        }
    }

    fn update_scores(&self, game: &Game) {
        self.score.set_inner_html(&game.score.to_string());
        self.previous_score
            .set_inner_html(&game.previous_score.to_string());
        self.high_score.set_inner_html(&game.high_score.to_string());
    }

    fn show_game_over(&self, final_score: u32) {
        self.final_score.set_inner_html(&final_score.to_string());
        let _ = self.overlay.style().set_property("display", "flex");
    }

    fn hide_game_over(&self) {
        let _ = self.overlay.style().set_property("display", "none");
    }
}

/// The single owning context: game state, page handles, the in-flight swipe
/// origin, and the pending timeout handle (None while game over).
struct App {
    game: Game,
    page: PageElements,
    touch_start: Option<(f64, f64)>,
    timer: Option<i32>,
}

/// Resets all transient state and (re)arms the tick loop. Any outstanding
/// timeout is cancelled first, so rapid resets never stack a second loop.
fn initialize(app: &Rc<RefCell<App>>) {
    {
        let a = &mut *app.borrow_mut();
        if let Some(handle) = a.timer.take() {
            web_sys::window()
                .unwrap_throw()
                .clear_timeout_with_handle(handle);
        }
        a.game.reset();
        a.game.high_score = storage::load_high_score();
        a.page.hide_game_over();
        a.page.update_scores(&a.game);
        render::draw_frame(&a.page.context, &a.game);
    }
    schedule_tick(app);
}

/// Arms a one-shot timeout after the game's current tick interval and
/// remembers its handle for cancellation.
fn schedule_tick(app: &Rc<RefCell<App>>) {
    let delay = app.borrow().game.tick_ms as i32;
    let tick_app = Rc::clone(app);
    let tick = Closure::once_into_js(move || run_tick(&tick_app));
    let handle = web_sys::window()
        .unwrap_throw()
        .set_timeout_with_callback_and_timeout_and_arguments_0(tick.unchecked_ref(), delay)
        .unwrap_throw();
    app.borrow_mut().timer = Some(handle);
}

/// One tick: advance the simulation, then repaint and re-arm while the game
/// is still running. A death stops the loop until the reset button fires.
fn run_tick(app: &Rc<RefCell<App>>) {
    let outcome = {
        let a = &mut *app.borrow_mut();
        a.timer = None;
        let outcome = a.game.step();
        match outcome {
            Tick::Died => {
                a.page.show_game_over(a.game.score);
            }
            Tick::Ate { new_high } => {
                if new_high {
                    storage::store_high_score(a.game.high_score);
                }
                a.page.update_scores(&a.game);
                render::draw_frame(&a.page.context, &a.game);
            }
            Tick::Moved => {
                render::draw_frame(&a.page.context, &a.game);
            }
        }
        outcome
    };
    if outcome != Tick::Died {
        schedule_tick(app);
    }
}

fn wire_keyboard(app: &Rc<RefCell<App>>, document: &web_sys::Document) {
    let app = Rc::clone(app);
    let on_key = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            if let Some(dir) = input::direction_for_key(&event.key()) {
                let a = &mut *app.borrow_mut();
                if a.game.phase == Phase::Running {
                    a.game.steer(dir);
                }
            }
        },
    );
    document
        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .unwrap_throw();
    on_key.forget();
}

/// Swipe detection over the canvas. Both touch events suppress the default
/// browser gestures (scroll, zoom), which needs non-passive listeners.
fn wire_touch(app: &Rc<RefCell<App>>) {
    let canvas = app.borrow().page.canvas.clone();
    let mut opts = web_sys::AddEventListenerOptions::new();
    opts.passive(false);

    let start_app = Rc::clone(app);
    let on_start = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(
        move |event: web_sys::TouchEvent| {
            event.prevent_default();
            if let Some(touch) = event.changed_touches().get(0) {
                start_app.borrow_mut().touch_start =
                    Some((touch.client_x() as f64, touch.client_y() as f64));
            }
        },
    );
    canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            on_start.as_ref().unchecked_ref(),
            &opts,
        )
        .unwrap_throw();
    on_start.forget();

    let end_app = Rc::clone(app);
    let on_end = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(
        move |event: web_sys::TouchEvent| {
            event.prevent_default();
            let Some(touch) = event.changed_touches().get(0) else {
                return;
            };
            let a = &mut *end_app.borrow_mut();
            let Some((x0, y0)) = a.touch_start.take() else {
                return;
            };
            let dx = touch.client_x() as f64 - x0;
            let dy = touch.client_y() as f64 - y0;
            if let Some(dir) = input::direction_for_swipe(dx, dy) {
                if a.game.phase == Phase::Running {
                    a.game.steer(dir);
                }
            }
        },
    );
    canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "touchend",
            on_end.as_ref().unchecked_ref(),
            &opts,
        )
        .unwrap_throw();
    on_end.forget();
}

fn wire_reset(app: &Rc<RefCell<App>>) {
    let reset_app = Rc::clone(app);
    let on_reset = Closure::<dyn FnMut()>::new(move || initialize(&reset_app));
    app.borrow()
        .page
        .play_again
        .add_event_listener_with_callback("click", on_reset.as_ref().unchecked_ref())
        .unwrap_throw();
    on_reset.forget();
}

#[wasm_bindgen(start)]
pub fn main() {
    let app = Rc::new(RefCell::new(App {
        game: Game::new(),
        page: PageElements::init(),
        touch_start: None,
        timer: None,
    }));

    let document = web_sys::window()
        .unwrap_throw()
        .document()
        .unwrap_throw();
    wire_keyboard(&app, &document);
    wire_touch(&app);
    wire_reset(&app);

    initialize(&app);
}
