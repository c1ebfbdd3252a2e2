use yahtzee::{Category, Game, GameOptions, GamePhase, GameSnapshot, RoundPhase};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    /// Restores a game from a value produced by `save`.
    pub fn restore(snapshot: JsValue, seed: u32) -> Result<WasmGame, JsValue> {
        let snapshot: GameSnapshot =
            serde_wasm_bindgen::from_value(snapshot).map_err(js_err)?;
        let game = Game::from_snapshot(snapshot, GameOptions::default(), seed as u64)
            .map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn round(&mut self) -> bool {
        self.game.round()
    }

    pub fn throw_dice(&mut self) -> bool {
        self.game.throw_dice()
    }

    pub fn lock_dice(&mut self, index: u32) -> Result<(), JsValue> {
        self.game.lock_dice(index as usize).map_err(js_err)
    }

    pub fn estimate(&self, category: &str) -> Result<u32, JsValue> {
        let category = parse_category(category)?;
        Ok(u32::from(self.game.estimate(category)))
    }

    pub fn commit(&mut self, category: &str) -> Result<u32, JsValue> {
        let category = parse_category(category)?;
        self.game
            .commit(category)
            .map(u32::from)
            .map_err(js_err)
    }

    pub fn score(&self) -> u32 {
        u32::from(self.game.score())
    }

    /// Returns the plain state to persist, e.g. in `localStorage`.
    pub fn save(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.game.snapshot())
    }

    /// Returns everything needed to render the board.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        let estimates = self.game.estimates();
        let objectives = self
            .game
            .objectives()
            .iter()
            .map(|objective| JsObjective {
                name: objective.name().name(),
                display: objective.display().to_string(),
                locked: objective.is_locked(),
                points: objective.points().map(u32::from),
                estimate: u32::from(estimates[objective.name().index()]),
            })
            .collect();

        let view = View {
            phase: phase_to_str(self.game.phase()),
            round_phase: round_phase_to_str(self.game.round_phase()),
            rounds: u32::from(self.game.rounds()),
            current_round: u32::from(self.game.current_round()),
            rolls_left: u32::from(self.game.rolls_left()),
            dice: self
                .game
                .dice()
                .iter()
                .map(|die| JsDie {
                    value: die.value(),
                    locked: die.is_locked(),
                })
                .collect(),
            objectives,
            score: u32::from(self.game.score()),
        };

        to_js_value(&view)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct View {
    phase: &'static str,
    round_phase: &'static str,
    rounds: u32,
    current_round: u32,
    rolls_left: u32,
    dice: Vec<JsDie>,
    objectives: Vec<JsObjective>,
    score: u32,
}

#[derive(Serialize)]
struct JsDie {
    value: u8,
    locked: bool,
}

#[derive(Serialize)]
struct JsObjective {
    name: &'static str,
    display: String,
    locked: bool,
    points: Option<u32>,
    estimate: u32,
}

fn parse_category(name: &str) -> Result<Category, JsValue> {
    name.parse::<Category>()
        .map_err(|_| JsValue::from_str(&format!("unknown category `{name}`")))
}

fn phase_to_str(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Active => "Active",
        GamePhase::Finished => "Finished",
    }
}

fn round_phase_to_str(phase: RoundPhase) -> &'static str {
    match phase {
        RoundPhase::Rolling => "Rolling",
        RoundPhase::Selecting => "Selecting",
        RoundPhase::Ended => "Ended",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
