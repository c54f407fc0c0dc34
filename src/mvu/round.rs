use std::fmt;

use tracing::{debug, info, warn};

use super::error::AppError;
use crate::model::{RoundConfig, RoundState, Summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Round,
    Summary,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Start => write!(f, "start"),
            Screen::Round => write!(f, "round"),
            Screen::Summary => write!(f, "summary"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppModel {
    pub draft: RoundConfig,
    pub screen: Screen,
    pub round: Option<RoundState>,
    /// Reason the most recent message was ignored, cleared by the next accepted one.
    pub notice: Option<AppError>,
    finished: bool,
}

impl AppModel {
    #[must_use]
    pub fn new(draft: RoundConfig) -> Self {
        Self {
            draft,
            screen: Screen::Start,
            round: None,
            notice: None,
            finished: false,
        }
    }

    /// Derived summary of the active round, if any.
    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        self.round.as_ref().map(Summary::from_round)
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(RoundConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SetPlayerCount(usize),
    SetPlayerName { player: usize, name: String },
    SetHoleCount(usize),
    StartRound,
    Increment { player: usize },
    Decrement { player: usize },
    SetPar(u32),
    NextHole,
    SelectHole(usize),
    ShowSummary,
    EditStroke { player: usize, hole: usize, text: String },
    Restart,
}

impl Msg {
    fn action(&self) -> &'static str {
        match self {
            Msg::SetPlayerCount(_) => "changing players",
            Msg::SetPlayerName { .. } => "renaming players",
            Msg::SetHoleCount(_) => "changing holes",
            Msg::StartRound => "starting a round",
            Msg::Increment { .. } | Msg::Decrement { .. } => "counting strokes",
            Msg::SetPar(_) => "setting par",
            Msg::NextHole => "next hole",
            Msg::SelectHole(_) => "selecting a hole",
            Msg::ShowSummary => "opening the summary",
            Msg::EditStroke { .. } => "editing strokes",
            Msg::Restart => "restarting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Render(Screen),
    RoundStarted,
    RoundFinished,
}

/// Applies `msg` to `model`. A rejected message leaves the model unchanged
/// apart from `notice` and produces no effects.
pub fn update(model: &mut AppModel, msg: Msg) -> Vec<Effect> {
    debug!(?msg, screen = %model.screen, "update");
    match apply(model, msg) {
        Ok(effects) => {
            model.notice = None;
            effects
        }
        Err(e) => {
            warn!(error = %e, "message ignored");
            model.notice = Some(e);
            vec![]
        }
    }
}

fn apply(model: &mut AppModel, msg: Msg) -> Result<Vec<Effect>, AppError> {
    let action = msg.action();
    let wrong_screen = |screen| AppError::WrongScreen { action, screen };
    let screen = model.screen;

    match (screen, msg) {
        (Screen::Start, Msg::SetPlayerCount(n)) => {
            model.draft.set_player_count(n)?;
            Ok(vec![Effect::Render(Screen::Start)])
        }
        (Screen::Start, Msg::SetPlayerName { player, name }) => {
            model.draft.set_player_name(player, name)?;
            Ok(vec![Effect::Render(Screen::Start)])
        }
        (Screen::Start, Msg::SetHoleCount(n)) => {
            model.draft.set_hole_count(n)?;
            Ok(vec![Effect::Render(Screen::Start)])
        }
        (Screen::Start, Msg::StartRound) => {
            let round = model.draft.start_round()?;
            info!(
                players = round.player_count(),
                holes = round.hole_count(),
                "round started"
            );
            model.round = Some(round);
            model.screen = Screen::Round;
            model.finished = false;
            Ok(vec![Effect::RoundStarted, Effect::Render(Screen::Round)])
        }
        (Screen::Round, Msg::Increment { player }) => {
            let round = active_round(model, wrong_screen)?;
            let hole = round.current_hole();
            round.increment_stroke(player, hole)?;
            Ok(vec![Effect::Render(Screen::Round)])
        }
        (Screen::Round, Msg::Decrement { player }) => {
            let round = active_round(model, wrong_screen)?;
            let hole = round.current_hole();
            // At the floor this is a silent no-op.
            round.decrement_stroke(player, hole)?;
            Ok(vec![Effect::Render(Screen::Round)])
        }
        (Screen::Round, Msg::SetPar(value)) => {
            let round = active_round(model, wrong_screen)?;
            let hole = round.current_hole();
            round.set_par(hole, value)?;
            Ok(vec![Effect::Render(Screen::Round)])
        }
        (Screen::Round, Msg::NextHole) => {
            let round = active_round(model, wrong_screen)?;
            if !round.advance_hole() {
                debug!("next hole ignored on final hole");
            }
            Ok(vec![Effect::Render(Screen::Round)])
        }
        (Screen::Round, Msg::SelectHole(hole)) => {
            let round = active_round(model, wrong_screen)?;
            if !round.visible_holes().contains(&hole) {
                return Err(AppError::HoleNotVisible(hole + 1));
            }
            round.jump_to_hole(hole)?;
            Ok(vec![Effect::Render(Screen::Round)])
        }
        (Screen::Round, Msg::ShowSummary) => {
            let round = active_round(model, wrong_screen)?;
            if !round.is_final_hole() {
                return Err(AppError::NotFinalHole);
            }
            model.screen = Screen::Summary;
            let mut effects = Vec::with_capacity(2);
            if !model.finished {
                model.finished = true;
                info!("round finished");
                effects.push(Effect::RoundFinished);
            }
            effects.push(Effect::Render(Screen::Summary));
            Ok(effects)
        }
        (Screen::Summary, Msg::EditStroke { player, hole, text }) => {
            let round = active_round(model, wrong_screen)?;
            if !round.set_stroke_from_text(player, hole, &text)? {
                debug!(%text, "stroke entry left unchanged");
            }
            Ok(vec![Effect::Render(Screen::Summary)])
        }
        (Screen::Round | Screen::Summary, Msg::Restart) => {
            model.round = None;
            model.screen = Screen::Start;
            model.finished = false;
            Ok(vec![Effect::Render(Screen::Start)])
        }
        (screen, _) => Err(wrong_screen(screen)),
    }
}

fn active_round(
    model: &mut AppModel,
    wrong_screen: impl Fn(Screen) -> AppError,
) -> Result<&mut RoundState, AppError> {
    let screen = model.screen;
    model.round.as_mut().ok_or_else(|| wrong_screen(screen))
}
