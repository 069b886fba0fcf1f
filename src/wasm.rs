use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::autoplay::AutoPlay;
use crate::config::ViewerConfig;
use crate::render::NavState;
use crate::replay::{ReplayOutcome, Session};
use crate::store::{Kifu, Store};
use crate::types::ReplayState;

/// State snapshot handed to the page after every navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ViewState {
    #[serde(flatten)]
    replay: ReplayState,
    nav: NavState,
    auto_playing: bool,
}

/// Browser-facing viewer: one loaded store, one selected record, one cursor.
#[wasm_bindgen]
pub struct KifuViewer {
    config: ViewerConfig,
    store: Option<Store>,
    session: Session,
    auto: AutoPlay,
}

#[wasm_bindgen]
impl KifuViewer {
    /// `config` may be `undefined` or a partial settings object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<KifuViewer, JsValue> {
        let config: ViewerConfig = if config.is_undefined() || config.is_null() {
            ViewerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(to_js_error)?
        };
        let auto = AutoPlay::new(config.auto_play_interval());
        Ok(Self {
            config,
            store: None,
            session: Session::default(),
            auto,
        })
    }

    /// Replaces the store and clears the current record.
    pub fn load_store(&mut self, json: &str) -> Result<(), JsValue> {
        let store = Store::from_json(json).map_err(to_js_error)?;
        self.store = Some(store);
        self.reset(Vec::new());
        Ok(())
    }

    pub fn big_folders(&self) -> Result<JsValue, JsValue> {
        let folders = self
            .store
            .as_ref()
            .map(|store| store.big_folders.as_slice())
            .unwrap_or_default();
        to_js(&folders)
    }

    pub fn small_folders(&self, big: &str) -> Result<JsValue, JsValue> {
        let folders = self
            .store
            .as_ref()
            .map(|store| store.small_folders(big))
            .unwrap_or_default();
        to_js(&folders)
    }

    /// Filtered kifu list for one folder; each entry keeps its unfiltered index.
    pub fn kifus(&self, big: &str, small: &str, query: &str) -> Result<JsValue, JsValue> {
        let summaries = self
            .store
            .as_ref()
            .map(|store| {
                store.summaries(big, small, query, self.config.comment_preview_chars)
            })
            .unwrap_or_default();
        to_js(&summaries)
    }

    /// Loads a record from the store and returns its start state.
    pub fn select_kifu(&mut self, big: &str, small: &str, index: usize) -> Result<JsValue, JsValue> {
        let store = self
            .store
            .as_ref()
            .ok_or_else(|| JsValue::from_str("no store loaded"))?;
        let moves = store
            .kifu(big, small, index)
            .map_err(to_js_error)?
            .moves
            .clone();
        self.reset(moves);
        self.state()
    }

    /// Loads a standalone record object (`{ moves: [...] , ... }`).
    pub fn load_kifu(&mut self, kifu: JsValue) -> Result<JsValue, JsValue> {
        let kifu: Kifu = serde_wasm_bindgen::from_value(kifu).map_err(to_js_error)?;
        self.reset(kifu.moves);
        self.state()
    }

    pub fn goto(&mut self, n: i32) -> Result<JsValue, JsValue> {
        let outcome = self.navigate(|session| session.seek(i64::from(n)));
        self.view(&outcome)
    }

    pub fn first(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.navigate(Session::first);
        self.view(&outcome)
    }

    pub fn previous(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.navigate(Session::previous);
        self.view(&outcome)
    }

    pub fn next(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.navigate(Session::next);
        self.view(&outcome)
    }

    pub fn last(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.navigate(Session::last);
        self.view(&outcome)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        self.view(&self.session.outcome())
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto.is_running()
    }

    /// Returns whether auto-play is running afterwards.
    pub fn toggle_auto(&mut self) -> bool {
        self.auto.toggle(Instant::now())
    }

    /// Polled by the page timer. Returns the new state when a ply was
    /// advanced, otherwise `null`.
    pub fn tick(&mut self) -> Result<JsValue, JsValue> {
        let session = std::mem::take(&mut self.session);
        let (session, outcome) = self.auto.tick(Instant::now(), session);
        self.session = session;
        match outcome {
            Some(outcome) => self.view(&outcome),
            None => Ok(JsValue::NULL),
        }
    }
}

impl KifuViewer {
    fn reset(&mut self, moves: Vec<String>) {
        self.auto.stop();
        self.session = Session::new(moves);
    }

    fn navigate(&mut self, step: impl FnOnce(Session) -> (Session, ReplayOutcome)) -> ReplayOutcome {
        let (session, outcome) = step(std::mem::take(&mut self.session));
        self.session = session;
        outcome
    }

    fn view(&self, outcome: &ReplayOutcome) -> Result<JsValue, JsValue> {
        to_js(&ViewState {
            replay: outcome.to_state(),
            nav: NavState::new(outcome.move_index, outcome.total_moves),
            auto_playing: self.auto.is_running(),
        })
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(to_js_error)
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
