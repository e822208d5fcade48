// crates/voidtrade-state/src/tutorial.rs
// ============================================================================
// Module: Tutorial State
// Description: Guided-tour step sequence, gating, and resumption.
// Purpose: Walk a new player through the station menu and the first jump,
//          locking the UI down to the step's target along the way.
// Dependencies: voidtrade-cache
// ============================================================================

//! ## Overview
//! The tutorial is a fixed sequence of steps. Each step highlights one UI
//! element and either waits for a Next click or auto-advances when the player
//! performs the step's action. Progress persists through
//! [`voidtrade_cache::TutorialStore`], so a half-finished run resumes at the
//! saved step and a finished or skipped run never restarts on its own.
//! Invariants:
//! - `step_index` always points at a valid entry of [`steps`] while active.
//! - Skipping only moves forward; a resume never rewinds past the saved step.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use voidtrade_cache::KeyValueStore;
use voidtrade_cache::TutorialProgress;
use voidtrade_cache::TutorialStore;

// ============================================================================
// SECTION: Step Definitions
// ============================================================================

/// One step of the guided tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    /// Stable step identifier (also the persisted resume point).
    pub id: &'static str,
    /// Page the step lives on.
    pub page: &'static str,
    /// UI element to highlight; `None` shows a centered popover.
    pub driver_element: Option<&'static str>,
    /// Popover side relative to the element.
    pub driver_side: Option<&'static str>,
    /// Whether clicks on the highlighted element are absorbed.
    pub disable_active_interaction: bool,
    /// Message shown in the popover.
    pub message: &'static str,
    /// Whether the step advances via [`TutorialState::complete_action`]
    /// instead of a Next button.
    pub auto_advance: bool,
}

/// The full tour, in order.
const STEPS: [TutorialStep; 21] = [
    TutorialStep {
        id: "enter_game",
        page: "galaxies",
        driver_element: Some("galaxy-card-enter"),
        driver_side: Some("top"),
        disable_active_interaction: false,
        message: "Your galaxy is ready! Click \"Continue\" Game to begin your adventure.",
        auto_advance: true,
    },
    TutorialStep {
        id: "enter_callsign",
        page: "play",
        driver_element: Some("callsign-input"),
        driver_side: Some("bottom"),
        disable_active_interaction: false,
        message: "Choose a call sign — this is how other captains will know you across the galaxy.",
        auto_advance: false,
    },
    TutorialStep {
        id: "submit_callsign",
        page: "play",
        driver_element: Some("callsign-submit"),
        driver_side: Some("top"),
        disable_active_interaction: false,
        message: "Click \"Launch\" to begin your journey!",
        auto_advance: true,
    },
    TutorialStep {
        id: "game_overview",
        page: "play",
        driver_element: Some("game-main"),
        driver_side: Some("top"),
        disable_active_interaction: true,
        message: "Welcome to your star system, Commander. On the left you'll find the station menu — each service opens in the center panel. When you get a ship, your ship stats will be on the right.",
        auto_advance: false,
    },
    TutorialStep {
        id: "click_star_system",
        page: "play",
        driver_element: Some("menu-planets"),
        driver_side: Some("right"),
        disable_active_interaction: false,
        message: "Click \"Star System\" to see planets and orbital bodies around the star you are currently orbiting.",
        auto_advance: true,
    },
    TutorialStep {
        id: "view_star_system",
        page: "play",
        driver_element: Some("action-panel"),
        driver_side: Some("left"),
        disable_active_interaction: true,
        message: "This panel shows the planets, moons, and other bodies orbiting your star. Some planets are rich in minerals — keep an eye out for them.",
        auto_advance: false,
    },
    TutorialStep {
        id: "click_warp_gates",
        page: "play",
        driver_element: Some("menu-warp"),
        driver_side: Some("right"),
        disable_active_interaction: false,
        message: "Click Warp Gates to see connections to other systems.",
        auto_advance: true,
    },
    TutorialStep {
        id: "view_warp_gates",
        page: "play",
        driver_element: Some("action-panel"),
        driver_side: Some("left"),
        disable_active_interaction: true,
        message: "Warp gates connect star systems. Use the sort buttons to find nearby destinations. You'll need fuel to travel - check your fuel gauge before jumping.",
        auto_advance: false,
    },
    TutorialStep {
        id: "click_shipyard",
        page: "play",
        driver_element: Some("menu-shipyard"),
        driver_side: Some("right"),
        disable_active_interaction: false,
        message: "Visit the Shipyard to get your first ship.",
        auto_advance: true,
    },
    TutorialStep {
        id: "take_free_ship",
        page: "play",
        driver_element: Some("action-panel"),
        driver_side: Some("left"),
        disable_active_interaction: false,
        message: "The shipyard owner has a ship nobody wants — and it's free. Click \"Take the Ship\" to claim it.",
        auto_advance: true,
    },
    TutorialStep {
        id: "click_trading_hub",
        page: "play",
        driver_element: Some("menu-trading_hub"),
        driver_side: Some("right"),
        disable_active_interaction: false,
        message: "Click the Trading Hub — this is where you buy and sell minerals for profit.",
        auto_advance: true,
    },
    TutorialStep {
        id: "view_trading_hub",
        page: "play",
        driver_element: Some("action-panel"),
        driver_side: Some("left"),
        disable_active_interaction: true,
        message: "Here you can trade minerals. Each system has different prices — buy low, sell high at another system to make a profit.",
        auto_advance: false,
    },
    TutorialStep {
        id: "click_salvage_yard",
        page: "play",
        driver_element: Some("menu-salvage"),
        driver_side: Some("right"),
        disable_active_interaction: false,
        message: "The Salvage Yard sells ship components — check it out.",
        auto_advance: true,
    },
    TutorialStep {
        id: "view_salvage_yard",
        page: "play",
        driver_element: Some("action-panel"),
        driver_side: Some("left"),
        disable_active_interaction: true,
        message: "Salvage yards sell second-hand components: engines, shields, weapons. Install them to upgrade your ship.",
        auto_advance: false,
    },
    TutorialStep {
        id: "review_ship_details",
        page: "play",
        driver_element: Some("player-stats"),
        driver_side: Some("left"),
        disable_active_interaction: true,
        message: "Your ship status is here — hull, shields, fuel, and cargo. Keep an eye on fuel before warping and hull in combat.",
        auto_advance: false,
    },
    TutorialStep {
        id: "click_star_map",
        page: "play",
        driver_element: Some("btn-star-map"),
        driver_side: Some("bottom"),
        disable_active_interaction: false,
        message: "Click Star Map to see the galaxy from above.",
        auto_advance: true,
    },
    TutorialStep {
        id: "click_nearby_star",
        page: "map",
        driver_element: Some("map-area"),
        driver_side: Some("top"),
        disable_active_interaction: false,
        message: "Click any star on the map to see its details in the sidebar.",
        auto_advance: true,
    },
    TutorialStep {
        id: "review_star_details",
        page: "map",
        driver_element: Some("system-info-panel"),
        driver_side: Some("left"),
        disable_active_interaction: true,
        message: "The sidebar shows everything you know about a star — type, temperature, services, and travel cost. Stars you haven't visited appear dimmer.",
        auto_advance: false,
    },
    TutorialStep {
        id: "click_warp_gates_2",
        page: "play",
        driver_element: Some("menu-warp"),
        driver_side: Some("right"),
        disable_active_interaction: false,
        message: "Click Warp Gates — time to explore a new system!",
        auto_advance: true,
    },
    TutorialStep {
        id: "warp_to_nearest",
        page: "play",
        driver_element: Some("warp-gate-first"),
        driver_side: Some("left"),
        disable_active_interaction: false,
        message: "Click a warp gate to jump to a nearby system. Bon voyage, Commander!",
        auto_advance: true,
    },
    TutorialStep {
        id: "tutorial_complete",
        page: "play",
        driver_element: None,
        driver_side: None,
        disable_active_interaction: false,
        message: "You've earned your wings, Commander. The galaxy is yours — chart new systems, corner the mineral market, or just see what's out there.",
        auto_advance: false,
    },
];

/// Returns the full tour, in order.
#[must_use]
pub const fn steps() -> &'static [TutorialStep] {
    &STEPS
}

/// Maps a step to the station-menu action that completes it.
fn menu_action_for(step_id: &str) -> Option<&'static str> {
    match step_id {
        "click_star_system" => Some("planets"),
        "click_warp_gates" | "click_warp_gates_2" => Some("warp"),
        "click_shipyard" => Some("shipyard"),
        "click_trading_hub" => Some("trading_hub"),
        "click_salvage_yard" => Some("salvage"),
        _ => None,
    }
}

// ============================================================================
// SECTION: Tutorial State
// ============================================================================

/// Tutorial session container.
///
/// # Invariants
/// - Completion state persists on every transition; a crash mid-tour resumes
///   at the last persisted step.
pub struct TutorialState {
    /// Whether the tour is running.
    active: bool,
    /// Index of the current step while active.
    step_index: usize,
    /// Whether the tour finished or was skipped this session.
    completed: bool,
    /// Versioned persistence backend.
    store: TutorialStore,
}

impl TutorialState {
    /// Builds an inactive tutorial over host storage.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            active: false,
            step_index: 0,
            completed: false,
            store: TutorialStore::new(store),
        }
    }

    /// Whether the tour is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the current step while active.
    #[must_use]
    pub fn current_step(&self) -> Option<&'static TutorialStep> {
        if !self.active {
            return None;
        }
        STEPS.get(self.step_index)
    }

    /// Total step count.
    #[must_use]
    pub const fn total_steps(&self) -> usize {
        STEPS.len()
    }

    /// One-based number of the current step.
    #[must_use]
    pub const fn step_number(&self) -> usize {
        self.step_index + 1
    }

    /// The single menu item the current step permits, when it targets one.
    #[must_use]
    pub fn allowed_menu_item(&self) -> Option<&'static str> {
        self.current_step().and_then(|step| menu_action_for(step.id))
    }

    /// Whether the tour finished or was skipped this session.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Whether a previous run finished or was skipped, per persisted state.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.store.load().is_some_and(|progress| progress.completed)
    }

    /// Starts the tour from the first step.
    pub fn start(&mut self) {
        self.active = true;
        self.step_index = 0;
        self.completed = false;
        self.persist_step();
    }

    /// Restarts the tour, discarding completion.
    pub fn restart(&mut self) {
        self.completed = false;
        self.active = true;
        self.step_index = 0;
        self.persist_step();
    }

    /// Moves to the next step, finishing the tour at the last one.
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }
        if self.step_index >= STEPS.len() - 1 {
            self.finish();
            return;
        }
        self.step_index += 1;
        self.persist_step();
    }

    /// Skips forward to a named step. Backward skips are ignored.
    pub fn skip_to_step(&mut self, step_id: &str) {
        if !self.active {
            return;
        }
        let Some(target) = STEPS.iter().position(|step| step.id == step_id) else {
            return;
        };
        if target <= self.step_index {
            return;
        }
        self.step_index = target;
        self.persist_step();
    }

    /// Reports a user action; auto-advancing steps advance when it matches.
    ///
    /// The action may be the step id itself or the menu action mapped to it
    /// (selecting `planets` completes `click_star_system`).
    pub fn complete_action(&mut self, action_id: &str) {
        let Some(step) = self.current_step() else {
            return;
        };
        if !step.auto_advance {
            return;
        }
        if step.id == action_id || menu_action_for(step.id) == Some(action_id) {
            self.advance();
        }
    }

    /// Whether a station-menu item is clickable under the current step.
    ///
    /// Steps targeting a menu item allow only that item; view steps that
    /// lock the action panel lock the menu too; everything else is open.
    #[must_use]
    pub fn is_menu_item_allowed(&self, item_id: &str) -> bool {
        let Some(step) = self.current_step() else {
            return true;
        };
        if let Some(expected) = menu_action_for(step.id) {
            return expected == item_id;
        }
        if step.disable_active_interaction && step.driver_element == Some("action-panel") {
            return false;
        }
        true
    }

    /// Skips out of the tour, persisting it as completed at the current step.
    pub fn skip(&mut self) {
        let step_id = STEPS
            .get(self.step_index)
            .map_or("skipped", |step| step.id);
        self.active = false;
        self.completed = true;
        self.store.save(&TutorialProgress {
            completed: true,
            step_id: step_id.to_owned(),
        });
    }

    /// Resumes a persisted, unfinished run at its saved step.
    pub fn resume(&mut self) {
        if self.active {
            return;
        }
        let Some(progress) = self.store.load() else {
            return;
        };
        if progress.completed {
            return;
        }
        let Some(index) = STEPS.iter().position(|step| step.id == progress.step_id) else {
            return;
        };
        self.active = true;
        self.step_index = index;
        self.completed = false;
    }

    /// Persists the current step as unfinished progress.
    fn persist_step(&self) {
        if let Some(step) = STEPS.get(self.step_index) {
            self.store.save(&TutorialProgress {
                completed: false,
                step_id: step.id.to_owned(),
            });
        }
    }

    /// Ends the tour, persisting completion at the final step.
    fn finish(&mut self) {
        self.active = false;
        self.completed = true;
        self.store.save(&TutorialProgress {
            completed: true,
            step_id: "tutorial_complete".to_owned(),
        });
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only panic-based assertions are permitted.")]

    use voidtrade_cache::MemoryStore;

    use super::*;

    fn tutorial() -> TutorialState {
        TutorialState::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn inactive_tutorial_restricts_nothing() {
        let state = tutorial();
        assert!(state.current_step().is_none());
        assert!(state.is_menu_item_allowed("warp"));
        assert!(state.allowed_menu_item().is_none());
    }

    #[test]
    fn menu_steps_allow_only_their_target() {
        let mut state = tutorial();
        state.start();
        state.skip_to_step("click_star_system");
        assert!(state.is_menu_item_allowed("planets"));
        assert!(!state.is_menu_item_allowed("warp"));
        assert_eq!(state.allowed_menu_item(), Some("planets"));
    }

    #[test]
    fn locked_view_steps_lock_the_menu() {
        let mut state = tutorial();
        state.start();
        state.skip_to_step("view_star_system");
        assert!(!state.is_menu_item_allowed("planets"));
        assert!(!state.is_menu_item_allowed("warp"));
    }

    #[test]
    fn unlocked_view_steps_leave_the_menu_open() {
        let mut state = tutorial();
        state.start();
        // take_free_ship targets the action panel without locking it.
        state.skip_to_step("take_free_ship");
        assert!(state.is_menu_item_allowed("shipyard"));
        assert!(state.is_menu_item_allowed("warp"));
    }

    #[test]
    fn complete_action_advances_auto_steps_only() {
        let mut state = tutorial();
        state.start();
        state.skip_to_step("game_overview");
        state.complete_action("game_overview");
        assert_eq!(state.current_step().unwrap().id, "game_overview");

        state.advance();
        assert_eq!(state.current_step().unwrap().id, "click_star_system");
        state.complete_action("planets");
        assert_eq!(state.current_step().unwrap().id, "view_star_system");
    }

    #[test]
    fn skip_to_step_only_moves_forward() {
        let mut state = tutorial();
        state.start();
        state.skip_to_step("click_shipyard");
        assert_eq!(state.current_step().unwrap().id, "click_shipyard");
        state.skip_to_step("enter_callsign");
        assert_eq!(state.current_step().unwrap().id, "click_shipyard");
        state.skip_to_step("no_such_step");
        assert_eq!(state.current_step().unwrap().id, "click_shipyard");
    }

    #[test]
    fn advancing_past_the_last_step_finishes() {
        let mut state = tutorial();
        state.start();
        state.skip_to_step("tutorial_complete");
        state.advance();
        assert!(!state.is_active());
        assert!(state.is_completed());
    }

    #[test]
    fn resume_restores_a_half_finished_run() {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        {
            let mut first = TutorialState::new(Arc::clone(&backend));
            first.start();
            first.skip_to_step("click_trading_hub");
        }
        let mut second = TutorialState::new(backend);
        second.resume();
        assert!(second.is_active());
        assert_eq!(second.current_step().unwrap().id, "click_trading_hub");
    }

    #[test]
    fn resume_ignores_completed_runs() {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        {
            let mut first = TutorialState::new(Arc::clone(&backend));
            first.start();
            first.skip();
        }
        let mut second = TutorialState::new(backend);
        second.resume();
        assert!(!second.is_active());
        assert!(second.is_completed());
    }

    #[test]
    fn skip_records_the_current_step() {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut state = TutorialState::new(Arc::clone(&backend));
        state.start();
        state.skip_to_step("view_warp_gates");
        state.skip();
        let store = TutorialStore::new(backend);
        let progress = store.load().unwrap();
        assert!(progress.completed);
        assert_eq!(progress.step_id, "view_warp_gates");
    }

    #[test]
    fn restart_clears_completion() {
        let mut state = tutorial();
        state.start();
        state.skip();
        state.restart();
        assert!(state.is_active());
        assert_eq!(state.step_number(), 1);
        assert!(!state.is_completed());
    }
}
