// crates/voidtrade-state/src/travel.rs
// ============================================================================
// Module: Travel
// Description: Jump execution and the generation polling loop.
// Purpose: Drive a travel request to completion, polling the current-system
//          endpoint while the destination generates.
// Dependencies: voidtrade-api, voidtrade-types, tokio, tracing
// ============================================================================

//! ## Overview
//! A jump is the one long-running operation in the game. The server may
//! answer the travel request immediately with the destination, or with a
//! generation marker, in which case the client polls the current-system
//! endpoint until the marker clears or the poll budget runs out. Stage
//! messages are published through [`PlayerState::travel_status`] so the UI
//! can narrate the jump, and a minimum display time keeps instant jumps from
//! flickering.
//!
//! [`PlayerState::travel_status`]: crate::PlayerState

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;
use std::time::Instant;

use tracing::debug;
use tracing::error;
use tracing::warn;
use voidtrade_types::GenerationMarker;
use voidtrade_types::TravelResponse;
use voidtrade_types::location::SystemBlock;
use voidtrade_types::location::TravelRequest;

use crate::player::PlayerState;
use crate::player::SystemInfo;

// ============================================================================
// SECTION: Stage Messages
// ============================================================================

/// Stage shown while the request is being prepared.
const STAGE_INITIATING: &str = "Initiating warp drive...";

/// Stage shown while the travel request is in flight.
const STAGE_CALCULATING: &str = "Calculating jump coordinates...";

/// Stage shown while the destination system generates.
const STAGE_GENERATING: &str = "Generating star system...";

/// Stage shown once the destination is ready.
const STAGE_ARRIVING: &str = "Arriving at destination...";

/// Stage shown when the poll budget runs out.
const STAGE_TAKING_LONG: &str = "System generation taking longer than expected...";

// ============================================================================
// SECTION: Travel Configuration
// ============================================================================

/// Polling parameters for the generation loop.
///
/// # Invariants
/// - `max_polls` bounds the loop; the worst case is
///   `max_polls * poll_interval` of waiting after the travel request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelConfig {
    /// Delay between current-system polls.
    pub poll_interval: Duration,
    /// Poll attempts before giving up on generation.
    pub max_polls: u32,
    /// Minimum time the travel overlay stays up.
    pub min_display: Duration,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            max_polls: 60,
            min_display: Duration::from_secs(2),
        }
    }
}

// ============================================================================
// SECTION: Travel Execution
// ============================================================================

impl PlayerState {
    /// Jumps to a destination, polling through generation when needed.
    ///
    /// Returns `None` when a jump is already in flight, when no player is
    /// loaded, or when the jump fails; the failure message lands in `error`.
    pub async fn travel(&mut self, destination_uuid: &str, destination_name: &str) -> Option<TravelResponse> {
        if self.is_traveling {
            debug!("travel request ignored while a jump is in flight");
            return None;
        }
        self.is_traveling = true;
        self.travel_destination = Some(destination_name.to_owned());
        self.travel_status = Some(STAGE_INITIATING.to_owned());
        self.error = None;

        let result = self.travel_inner(destination_uuid).await;

        self.is_traveling = false;
        self.travel_destination = None;
        self.travel_status = None;
        result
    }

    /// Runs one jump from request through arrival.
    async fn travel_inner(&mut self, destination_uuid: &str) -> Option<TravelResponse> {
        let player_uuid = self.player_uuid.clone()?;
        let started = Instant::now();
        self.travel_status = Some(STAGE_CALCULATING.to_owned());

        let body = TravelRequest {
            destination_uuid: destination_uuid.to_owned(),
        };
        let envelope = match self.api.players().travel(&player_uuid, &body).await {
            Ok(envelope) => envelope,
            Err(err) => {
                error!(%err, "travel request failed");
                self.error = Some(err.to_string());
                return None;
            }
        };

        let Some(data) = envelope.data.filter(|_| envelope.success) else {
            self.error = Some(
                envelope
                    .error
                    .map_or_else(|| "Travel failed".to_owned(), |error| error.message),
            );
            return None;
        };

        if data.is_generating() {
            self.travel_status = Some(STAGE_GENERATING.to_owned());
            if let Some(mut arrived) = self.poll_generation(&player_uuid).await {
                // The fuel cost only rides on the initial response.
                arrived.fuel_remaining = data.fuel_remaining;
                self.adopt_fuel(data.fuel_remaining);
                self.hold_minimum_display(started).await;
                return Some(arrived);
            }
            // Give up gracefully; the server keeps generating without us.
            warn!(destination_uuid, "destination still generating after poll budget");
            self.travel_status = Some(STAGE_TAKING_LONG.to_owned());
            self.adopt_arrival(&data);
            self.hold_minimum_display(started).await;
            return Some(data);
        }

        self.travel_status = Some(STAGE_ARRIVING.to_owned());
        self.adopt_arrival(&data);
        self.hold_minimum_display(started).await;
        Some(data)
    }

    /// Polls the current-system endpoint until the generation marker clears.
    async fn poll_generation(&mut self, player_uuid: &str) -> Option<TravelResponse> {
        for attempt in 0..self.travel_config.max_polls {
            tokio::time::sleep(self.travel_config.poll_interval).await;
            let dots = match attempt % 3 {
                0 => ".",
                1 => "..",
                _ => "...",
            };
            self.travel_status = Some(format!("Generating star system{dots}"));

            match self.api.players().current_system(player_uuid).await {
                Ok(envelope) => {
                    let Some(system) = envelope.data.filter(|_| envelope.success) else {
                        continue;
                    };
                    if system.is_generating() {
                        continue;
                    }
                    self.travel_status = Some(STAGE_ARRIVING.to_owned());
                    self.current_system = Some(SystemInfo {
                        uuid: system.uuid.clone(),
                        name: system.name.clone(),
                        system_type: system.system_type.clone(),
                        position: system.position,
                    });
                    if let Some(sector) = system.sector.clone() {
                        self.current_sector = Some(sector);
                    }
                    self.location_details = None;
                    self.facilities = None;
                    return Some(TravelResponse {
                        status: system.status.clone(),
                        message: system.message.clone(),
                        destination: Some(SystemBlock {
                            uuid: system.uuid,
                            name: system.name,
                            system_type: system.system_type,
                            position: system.position,
                        }),
                        sector: system.sector,
                        fuel_remaining: None,
                    });
                }
                Err(err) => {
                    // Transient poll failures just burn an attempt.
                    debug!(%err, attempt, "current-system poll failed");
                }
            }
        }
        None
    }

    /// Adopts a completed travel response into the container.
    fn adopt_arrival(&mut self, data: &TravelResponse) {
        if let Some(destination) = data.destination.as_ref() {
            self.current_system = Some(SystemInfo {
                uuid: destination.uuid.clone(),
                name: destination.name.clone(),
                system_type: destination.system_type.clone(),
                position: destination.position,
            });
        }
        if let Some(sector) = data.sector.clone() {
            self.current_sector = Some(sector);
        }
        self.adopt_fuel(data.fuel_remaining);
        self.location_details = None;
        self.facilities = None;
    }

    /// Applies a post-jump fuel reading to the active ship.
    fn adopt_fuel(&mut self, fuel_remaining: Option<f64>) {
        if let Some(fuel) = fuel_remaining {
            if let Some(ship) = self.ship.as_mut() {
                ship.fuel.current = fuel;
            }
        }
    }

    /// Keeps the travel overlay up for the configured minimum.
    async fn hold_minimum_display(&self, started: Instant) {
        let elapsed = started.elapsed();
        if elapsed < self.travel_config.min_display {
            tokio::time::sleep(self.travel_config.min_display - elapsed).await;
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_polls_for_two_minutes() {
        let config = TravelConfig::default();
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.max_polls, 60);
        assert_eq!(config.min_display, Duration::from_secs(2));
    }
}
