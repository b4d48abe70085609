//! MindRelic entry point
//!
//! Handles platform-specific initialization and runs the arcade loop: a
//! fixed-timestep simulation driven by `requestAnimationFrame`, hash-based
//! page routing, and DOM HUD updates. Only the pong court draws to the
//! canvas; every other page is plain DOM.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent, TouchEvent};

    use mindrelic::consts::*;
    use mindrelic::games::memory::{Difficulty, MemoryPhase, MemoryState, SYMBOLS};
    use mindrelic::games::pong::{self, PongPhase, PongState, Side, TickInput};
    use mindrelic::games::tictactoe::{DuelState, Mark, RoundOutcome};
    use mindrelic::games::trivia::{QuizPhase, QuizState};
    use mindrelic::renderer::{RenderState, shapes};
    use mindrelic::{Route, Scoreboard, Settings};

    /// Arcade instance holding all state
    struct Arcade {
        route: Route,
        pong: PongState,
        memory: MemoryState,
        duel: DuelState,
        quiz: QuizState,
        settings: Settings,
        scoreboard: Scoreboard,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        pong_input: TickInput,
        key_up: bool,
        key_down: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        /// Deck size the card grid was last built for (0 = not built)
        memory_grid_built_for: usize,
        // One result per finished run
        pong_recorded: bool,
        memory_recorded: bool,
        duel_recorded: bool,
        quiz_recorded: bool,
    }

    impl Arcade {
        fn new(seed: u64) -> Self {
            Self {
                route: Route::Hub,
                pong: PongState::new(seed),
                memory: MemoryState::new(seed.wrapping_add(1)),
                duel: DuelState::new(),
                quiz: QuizState::new(seed.wrapping_add(2)),
                settings: Settings::load(),
                scoreboard: Scoreboard::new(),
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                pong_input: TickInput::default(),
                key_up: false,
                key_down: false,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                memory_grid_built_for: 0,
                pong_recorded: false,
                memory_recorded: false,
                duel_recorded: false,
                quiz_recorded: false,
            }
        }

        /// Switch pages; a running pong rally freezes when its page hides
        fn navigate(&mut self, route: Route) {
            if route == self.route {
                return;
            }
            if self.route == Route::Pong && self.pong.phase == PongPhase::Running {
                self.pong.phase = PongPhase::Paused;
            }
            self.route = route;
            log::info!("Navigated to {}", route.path());
        }

        /// Run simulation ticks for the active page
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                match self.route {
                    Route::Pong => {
                        self.pong_input.axis =
                            (self.key_down as i32 - self.key_up as i32) as f32;
                        let input = self.pong_input.clone();
                        pong::tick(&mut self.pong, &input, SIM_DT);
                        // Clear one-shot inputs after processing; the pointer
                        // target is one-shot too, so keyboard control resumes
                        // once the pointer stops moving
                        self.pong_input.start = false;
                        self.pong_input.pause = false;
                        self.pong_input.target_y = None;
                    }
                    Route::Memory => self.memory.tick(),
                    Route::TicTacToe => self.duel.tick(),
                    Route::Trivia => self.quiz.tick(),
                    Route::Hub | Route::NotFound => {}
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            self.record_results();

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Push finished runs onto the session scoreboard, once each.
        /// Flags re-arm when a game leaves its terminal phase, however the
        /// restart was triggered.
        fn record_results(&mut self) {
            if self.pong.phase != PongPhase::Over {
                self.pong_recorded = false;
            } else if !self.pong_recorded {
                self.pong_recorded = true;
                if self.pong.winner() == Some(Side::Player) {
                    let margin = (self.pong.player_score - self.pong.warden_score) as u32;
                    let run = self.scoreboard.next_run();
                    let rank = self
                        .scoreboard
                        .pong
                        .add(margin, self.pong.warden_score as u32, run);
                    log::info!("Pong win recorded (margin {margin}, rank {rank:?})");
                }
            }

            if self.memory.phase != MemoryPhase::Won {
                self.memory_recorded = false;
            } else if !self.memory_recorded {
                self.memory_recorded = true;
                let run = self.scoreboard.next_run();
                self.scoreboard.memory.add(
                    self.memory.attempts,
                    self.memory.elapsed_secs() as u32,
                    run,
                );
                log::info!(
                    "Memory clear recorded ({} attempts, {}s)",
                    self.memory.attempts,
                    self.memory.elapsed_secs()
                );
            }

            if !self.duel.match_over {
                self.duel_recorded = false;
            } else if !self.duel_recorded {
                self.duel_recorded = true;
                if let Some(champion) = self.duel.champion() {
                    let margin =
                        (self.duel.wins(champion) - self.duel.wins(champion.other())) as u32;
                    let run = self.scoreboard.next_run();
                    self.scoreboard.duel.add(margin, self.duel.round, run);
                    log::info!("Duel recorded ({} takes the match)", champion.icon());
                }
            }

            if self.quiz.phase != QuizPhase::Finished {
                self.quiz_recorded = false;
            } else if !self.quiz_recorded {
                self.quiz_recorded = true;
                let run = self.scoreboard.next_run();
                self.scoreboard
                    .trivia
                    .add(self.quiz.score, self.quiz.accuracy() as u32, run);
                log::info!("Quiz recorded ({} points)", self.quiz.score);
            }
        }

        /// Render the pong court (other pages are DOM-only)
        fn render(&mut self) {
            if self.route != Route::Pong {
                return;
            }
            let vertices = shapes::court(&self.pong);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            // Only touch the DOM when the text actually changed
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.get_attribute("class").as_deref() != Some(class) {
                let _ = el.set_attribute("class", class);
            }
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        set_class(document, id, if visible { "" } else { "hidden" });
    }

    fn set_overlay_visible(document: &Document, id: &str, visible: bool) {
        set_class(
            document,
            id,
            if visible { "overlay" } else { "overlay hidden" },
        );
    }

    /// Update every DOM element the active page shows
    fn update_dom(arcade: &mut Arcade, document: &Document) {
        // Page sections
        for route in [
            Route::Hub,
            Route::Pong,
            Route::Memory,
            Route::TicTacToe,
            Route::Trivia,
            Route::NotFound,
        ] {
            set_class(
                document,
                route.section_id(),
                if route == arcade.route { "page" } else { "page hidden" },
            );
        }

        // Global FPS counter
        set_visible(document, "hud-fps", arcade.settings.show_fps);
        if arcade.settings.show_fps {
            set_text(document, "hud-fps-value", &arcade.fps.to_string());
        }

        match arcade.route {
            Route::Hub => update_hub(arcade, document),
            Route::Pong => update_pong_dom(arcade, document),
            Route::Memory => update_memory_dom(arcade, document),
            Route::TicTacToe => update_duel_dom(arcade, document),
            Route::Trivia => update_quiz_dom(arcade, document),
            Route::NotFound => {}
        }
    }

    fn update_hub(arcade: &Arcade, document: &Document) {
        let pong_best = arcade
            .scoreboard
            .pong
            .best()
            .map(|e| format!("Best win: +{}", e.value))
            .unwrap_or_default();
        set_text(document, "hub-best-pong", &pong_best);

        let memory_best = arcade
            .scoreboard
            .memory
            .best()
            .map(|e| format!("Best clear: {} attempts", e.value))
            .unwrap_or_default();
        set_text(document, "hub-best-memory", &memory_best);

        let trivia_best = arcade
            .scoreboard
            .trivia
            .best()
            .map(|e| format!("Best run: {} pts", e.value))
            .unwrap_or_default();
        set_text(document, "hub-best-trivia", &trivia_best);
    }

    fn update_pong_dom(arcade: &Arcade, document: &Document) {
        let state = &arcade.pong;
        set_text(document, "pong-player-score", &state.player_score.to_string());
        set_text(document, "pong-warden-score", &state.warden_score.to_string());

        let message = match state.phase {
            PongPhase::Idle => "Press START to enter the Aether Grid.".to_string(),
            PongPhase::Running => "GAME ACTIVE".to_string(),
            PongPhase::Paused => "PAUSED - Escape resumes".to_string(),
            PongPhase::Over => match state.winner() {
                Some(Side::Player) => format!(
                    "RELIC ACQUIRED! PLAYER WINS {}-{}",
                    state.player_score, state.warden_score
                ),
                _ => format!(
                    "RITUAL FAILED. WARDEN WINS {}-{}",
                    state.warden_score, state.player_score
                ),
            },
        };
        set_text(document, "pong-message", &message);
        set_overlay_visible(document, "pong-overlay", state.phase != PongPhase::Running);
        set_text(
            document,
            "pong-start-btn",
            if state.phase == PongPhase::Over {
                "Re-Enter Aether"
            } else {
                "START"
            },
        );
    }

    fn update_memory_dom(arcade: &mut Arcade, document: &Document) {
        let playing = matches!(arcade.memory.phase, MemoryPhase::Playing | MemoryPhase::Won);

        set_visible(
            document,
            "memory-lobby",
            arcade.memory.phase == MemoryPhase::Lobby,
        );
        set_visible(
            document,
            "memory-countdown",
            arcade.memory.phase == MemoryPhase::Countdown,
        );
        set_visible(document, "memory-board", playing);

        // Difficulty highlight
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let id = format!("memory-diff-{}", difficulty.as_str().to_lowercase());
            let selected = arcade.memory.difficulty == difficulty;
            set_class(
                document,
                &id,
                if selected { "trait selected" } else { "trait" },
            );
        }

        if arcade.memory.phase == MemoryPhase::Countdown {
            set_text(
                document,
                "memory-countdown-value",
                &arcade.memory.countdown_value.to_string(),
            );
        }

        if playing {
            // (Re)build the card grid when a new deck is dealt
            if arcade.memory_grid_built_for != arcade.memory.deck.len() {
                build_memory_grid(document, arcade.memory.deck.len());
                arcade.memory_grid_built_for = arcade.memory.deck.len();
            }

            for index in 0..arcade.memory.deck.len() {
                let id = format!("memory-card-{index}");
                let face_up = arcade.memory.is_face_up(index);
                let symbol = SYMBOLS[arcade.memory.deck[index] as usize];
                set_text(document, &id, if face_up { symbol } else { "?" });
                let class = if arcade.memory.matched[index] {
                    "card matched"
                } else if face_up {
                    "card flipped"
                } else {
                    "card"
                };
                set_class(document, &id, class);
            }

            set_text(
                document,
                "memory-attempts",
                &format!("Attempts: {}", arcade.memory.attempts),
            );
            set_text(
                document,
                "memory-timer",
                &format!("{}s", arcade.memory.elapsed_secs()),
            );
            set_overlay_visible(
                document,
                "memory-overlay",
                arcade.settings.effective_distractions() && arcade.memory.overlay_ticks > 0,
            );

            let won = arcade.memory.phase == MemoryPhase::Won;
            set_overlay_visible(document, "memory-banner", won);
            if won {
                set_text(
                    document,
                    "memory-banner-text",
                    &format!(
                        "VIP Alert: All pairs matched in {} attempts over {} seconds.",
                        arcade.memory.attempts,
                        arcade.memory.elapsed_secs()
                    ),
                );
            }
        }
    }

    /// Create one button per card inside the grid container
    fn build_memory_grid(document: &Document, deck_len: usize) {
        let Some(grid) = document.get_element_by_id("memory-grid") else {
            return;
        };
        grid.set_inner_html("");
        let cols = if deck_len <= 12 { 4 } else { 6 };
        let _ = grid.set_attribute("data-cols", &cols.to_string());
        for index in 0..deck_len {
            if let Ok(card) = document.create_element("button") {
                let _ = card.set_attribute("id", &format!("memory-card-{index}"));
                let _ = card.set_attribute("class", "card");
                let _ = card.set_attribute("data-index", &index.to_string());
                card.set_text_content(Some("?"));
                let _ = grid.append_child(&card);
            }
        }
    }

    fn update_duel_dom(arcade: &Arcade, document: &Document) {
        let duel = &arcade.duel;
        set_text(document, "ttt-circle-wins", &duel.circle_wins.to_string());
        set_text(document, "ttt-triangle-wins", &duel.triangle_wins.to_string());
        set_text(document, "ttt-round", &format!("Round {}", duel.round));

        for (index, cell) in duel.board.iter().enumerate() {
            let id = format!("ttt-cell-{index}");
            match cell {
                Some(mark) => {
                    set_text(document, &id, mark.icon());
                    let class = match mark {
                        Mark::Circle => "cell circle",
                        Mark::Triangle => "cell triangle",
                    };
                    set_class(document, &id, class);
                }
                None => {
                    set_text(document, &id, "");
                    set_class(document, &id, "cell");
                }
            }
        }

        let message = if duel.match_over {
            duel.champion()
                .map(|m| format!("{} wins the game!", m.icon()))
                .unwrap_or_default()
        } else {
            match duel.outcome {
                Some(RoundOutcome::Win(mark)) => {
                    format!("{} wins this round! Next round starting...", mark.icon())
                }
                Some(RoundOutcome::Draw) => "It's a draw! Next round starting...".to_string(),
                None => format!("Current turn: {}", duel.current.icon()),
            }
        };
        set_text(document, "ttt-message", &message);
        set_visible(document, "ttt-reset-btn", duel.match_over);
    }

    fn update_quiz_dom(arcade: &Arcade, document: &Document) {
        let quiz = &arcade.quiz;
        set_text(document, "trivia-score", &format!("Score: {}", quiz.score));
        set_text(
            document,
            "trivia-progress",
            &format!("Question: {} / {}", quiz.index + 1, quiz.total()),
        );

        if let Some(el) = document.get_element_by_id("trivia-timer-bar") {
            let pct = quiz.time_ticks as f32
                / (mindrelic::games::trivia::QUESTION_TICKS as f32)
                * 100.0;
            let _ = el.set_attribute("style", &format!("width: {pct:.1}%"));
        }

        set_text(document, "trivia-question", quiz.question().prompt);

        let locked = quiz.phase != QuizPhase::Asking;
        for slot in 0..4 {
            let id = format!("trivia-option-{slot}");
            set_text(document, &id, quiz.option_text(slot));
            let class = if !locked {
                "answer"
            } else if slot == quiz.correct_slot() {
                "answer correct"
            } else if quiz.selected == Some(slot) {
                "answer wrong"
            } else {
                "answer dimmed"
            };
            set_class(document, &id, class);
        }

        set_text(
            document,
            "trivia-next-btn",
            if quiz.index + 1 == quiz.total() && locked {
                "See Results"
            } else {
                "Next Question"
            },
        );
        set_class(
            document,
            "trivia-next-btn",
            if quiz.phase == QuizPhase::Locked {
                "next"
            } else {
                "next disabled"
            },
        );

        let finished = quiz.phase == QuizPhase::Finished;
        set_overlay_visible(document, "trivia-results", finished);
        if finished {
            set_text(document, "trivia-verdict", quiz.verdict());
            set_text(
                document,
                "trivia-final-score",
                &format!("Final Score: {} points", quiz.score),
            );
            set_text(
                document,
                "trivia-accuracy",
                &format!(
                    "Accuracy: {}/{} ({:.1}%)",
                    quiz.correct,
                    quiz.total(),
                    quiz.accuracy()
                ),
            );
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("MindRelic starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width.max(1));
        canvas.set_height(height.max(1));

        // Initialize the arcade
        let seed = js_sys::Date::now() as u64;
        let arcade = Rc::new(RefCell::new(Arcade::new(seed)));
        log::info!("Arcade initialized with seed: {}", seed);

        // Initial route from the URL hash
        if let Ok(hash) = window.location().hash() {
            arcade.borrow_mut().route = Route::from_path(&hash);
        }

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width.max(1), height.max(1)).await;
        arcade.borrow_mut().render_state = Some(render_state);

        setup_navigation(arcade.clone());
        setup_pong_inputs(&canvas, arcade.clone());
        setup_memory_page(arcade.clone());
        setup_duel_page(arcade.clone());
        setup_quiz_page(arcade.clone());
        setup_auto_pause(arcade.clone());

        // Start the arcade loop
        request_animation_frame(arcade);

        log::info!("MindRelic running!");
    }

    fn setup_navigation(arcade: Rc<RefCell<Arcade>>) {
        let window = web_sys::window().unwrap();

        let handler = arcade.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::HashChangeEvent| {
            let window = web_sys::window().unwrap();
            if let Ok(hash) = window.location().hash() {
                handler.borrow_mut().navigate(Route::from_path(&hash));
            }
        });
        let _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        closure.forget();

        // Hub cards navigate by rewriting the hash
        let document = window.document().unwrap();
        for route in Route::GAMES {
            let card_id = format!("hub-card-{}", route.path().trim_start_matches('/'));
            if let Some(card) = document.get_element_by_id(&card_id) {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let window = web_sys::window().unwrap();
                    let _ = window.location().set_hash(route.path());
                });
                let _ =
                    card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_pong_inputs(canvas: &HtmlCanvasElement, arcade: Rc<RefCell<Arcade>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard: W/S drive the paddle, Space starts, Escape pauses
        {
            let arcade = arcade.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut a = arcade.borrow_mut();
                if a.route != Route::Pong {
                    return;
                }
                match event.key().as_str() {
                    "w" | "W" => a.key_up = true,
                    "s" | "S" => a.key_down = true,
                    " " | "Enter" => a.pong_input.start = true,
                    "Escape" => a.pong_input.pause = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let arcade = arcade.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut a = arcade.borrow_mut();
                match event.key().as_str() {
                    "w" | "W" => a.key_up = false,
                    "s" | "S" => a.key_down = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse: pointer Y maps to the paddle centre
        {
            let arcade = arcade.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = arcade.borrow_mut();
                let client_h = canvas_clone.client_height() as f32;
                if client_h > 0.0 {
                    let court_y =
                        event.offset_y() as f32 / client_h * pong::COURT_HEIGHT;
                    a.pong_input.target_y = Some(court_y.clamp(0.0, pong::COURT_HEIGHT));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch mirrors the mouse mapping
        {
            let arcade = arcade.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut a = arcade.borrow_mut();
                    let rect = canvas_clone.get_bounding_client_rect();
                    let client_h = rect.height() as f32;
                    if client_h > 0.0 {
                        let y = touch.client_y() as f32 - rect.top() as f32;
                        let court_y = y / client_h * pong::COURT_HEIGHT;
                        a.pong_input.target_y = Some(court_y.clamp(0.0, pong::COURT_HEIGHT));
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Start button
        if let Some(btn) = document.get_element_by_id("pong-start-btn") {
            let arcade = arcade.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                arcade.borrow_mut().pong_input.start = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_memory_page(arcade: Rc<RefCell<Arcade>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Difficulty traits
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let id = format!("memory-diff-{}", difficulty.as_str().to_lowercase());
            if let Some(btn) = document.get_element_by_id(&id) {
                let arcade = arcade.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    arcade.borrow_mut().memory.select_difficulty(difficulty);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Begin the ritual
        if let Some(btn) = document.get_element_by_id("memory-begin-btn") {
            let arcade = arcade.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                arcade.borrow_mut().memory.begin();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // One delegated listener flips cards by their data-index
        if let Some(grid) = document.get_element_by_id("memory-grid") {
            let arcade = arcade.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(target) = event.target() else { return };
                let Ok(element) = target.dyn_into::<Element>() else {
                    return;
                };
                if let Some(index) = element
                    .get_attribute("data-index")
                    .and_then(|s| s.parse::<usize>().ok())
                {
                    arcade.borrow_mut().memory.flip(index);
                }
            });
            let _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Play again
        if let Some(btn) = document.get_element_by_id("memory-reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = arcade.borrow_mut();
                a.memory.reset();
                a.memory_grid_built_for = 0;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_duel_page(arcade: Rc<RefCell<Arcade>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(grid) = document.get_element_by_id("ttt-grid") {
            let arcade = arcade.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(target) = event.target() else { return };
                let Ok(element) = target.dyn_into::<Element>() else {
                    return;
                };
                if let Some(index) = element
                    .get_attribute("data-index")
                    .and_then(|s| s.parse::<usize>().ok())
                {
                    arcade.borrow_mut().duel.play(index);
                }
            });
            let _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("ttt-reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                arcade.borrow_mut().duel.reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_quiz_page(arcade: Rc<RefCell<Arcade>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(options) = document.get_element_by_id("trivia-options") {
            let arcade = arcade.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(target) = event.target() else { return };
                let Ok(element) = target.dyn_into::<Element>() else {
                    return;
                };
                if let Some(slot) = element
                    .get_attribute("data-slot")
                    .and_then(|s| s.parse::<usize>().ok())
                {
                    arcade.borrow_mut().quiz.answer(slot);
                }
            });
            let _ = options
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("trivia-next-btn") {
            let arcade = arcade.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                arcade.borrow_mut().quiz.advance();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("trivia-replay-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                arcade.borrow_mut().quiz.replay();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(arcade: Rc<RefCell<Arcade>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let arcade = arcade.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut a = arcade.borrow_mut();
                    if a.route == Route::Pong && a.pong.phase == PongPhase::Running {
                        a.pong_input.pause = true;
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut a = arcade.borrow_mut();
                if a.route == Route::Pong && a.pong.phase == PongPhase::Running {
                    a.pong_input.pause = true;
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(arcade: Rc<RefCell<Arcade>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            arcade_loop(arcade, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn arcade_loop(arcade: Rc<RefCell<Arcade>>, time: f64) {
        {
            let document = web_sys::window().unwrap().document().unwrap();
            let mut a = arcade.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                mindrelic::consts::SIM_DT
            };
            a.last_time = time;

            a.update(dt, time);
            a.render();
            update_dom(&mut a, &document);
        }

        request_animation_frame(arcade);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("MindRelic (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web arcade");

    println!("\nRunning a headless pong rally...");
    smoke_rally();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive an unattended match to completion and report the result
#[cfg(not(target_arch = "wasm32"))]
fn smoke_rally() {
    use mindrelic::consts::SIM_DT;
    use mindrelic::games::pong::{PongPhase, PongState, TickInput, tick};

    let mut state = PongState::new(0xC0FFEE);
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
        SIM_DT,
    );

    let mut ticks = 0u64;
    while state.phase != PongPhase::Over && ticks < 1_000_000 {
        tick(&mut state, &TickInput::default(), SIM_DT);
        ticks += 1;
    }

    assert_eq!(state.phase, PongPhase::Over, "rally should decide a winner");
    println!(
        "✓ Match decided {}-{} after {} ticks",
        state.player_score, state.warden_score, ticks
    );
}
