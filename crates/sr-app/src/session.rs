//! Interactive session: owns the road network for the lifetime of one user.

use std::fmt;

use sr_core::Real;
use sr_core::timing::{ROUTE_QUERIES, Timer};
use sr_graph::{LocationAdjacency, NetworkView, RoadNetwork, Route};
use tracing::{debug, info};

use crate::command::Command;
use crate::error::{AppError, AppResult};
use crate::form::RoadForm;

/// Confirmation for an accepted road.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoadAdded {
    pub source: String,
    pub destination: String,
    pub distance: Real,
}

impl fmt::Display for RoadAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Added road: {} ↔ {} ({})",
            self.source, self.destination, self.distance
        )
    }
}

/// Answer to a shortest-route request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub route: Route,
    /// The network with the travelled edges marked.
    pub view: NetworkView,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "data", rename_all = "snake_case"))]
pub enum Reply {
    RoadAdded(RoadAdded),
    Network(Vec<LocationAdjacency>),
    Locations(Vec<String>),
    View(NetworkView),
    Route(RouteReport),
    Help,
    Quit,
}

/// Session state: created when a user starts, mutated per command, dropped at the end.
#[derive(Debug, Default)]
pub struct Session {
    network: RoadNetwork,
}

impl Session {
    pub fn new() -> Self {
        info!("session started");
        Self::default()
    }

    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    /// Validate the form and add the road. The network is untouched on error.
    pub fn submit_road(&mut self, form: &RoadForm) -> AppResult<RoadAdded> {
        let road = form.parse().inspect_err(|err| {
            debug!(%err, "road form rejected");
        })?;
        self.network
            .add_road(road.source, road.destination, road.distance)?;

        Ok(RoadAdded {
            source: road.source.to_owned(),
            destination: road.destination.to_owned(),
            distance: road.distance,
        })
    }

    /// Current roads, one row per location.
    pub fn network_listing(&self) -> AppResult<Vec<LocationAdjacency>> {
        Ok(self.network.adjacency_listing()?)
    }

    /// Locations offered for source/destination selection, sorted.
    pub fn locations(&self) -> Vec<String> {
        self.network
            .registry()
            .sorted_labels()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub fn view(&self) -> AppResult<NetworkView> {
        Ok(NetworkView::full(&self.network)?)
    }

    /// Shortest route between two registered locations.
    ///
    /// Disconnected locations yield `AppError::NoRoute`.
    pub fn compute_route(&self, from: &str, to: &str) -> AppResult<RouteReport> {
        let timer = Timer::start("route query");
        let route = self.network.shortest_path(from, to)?;
        if let Some(elapsed) = timer.stop_into(&ROUTE_QUERIES) {
            debug!(elapsed_s = elapsed, "route query timed");
        }

        if !route.is_reachable() {
            return Err(AppError::NoRoute {
                from: from.to_owned(),
                to: to.to_owned(),
            });
        }

        let view = NetworkView::highlighted(&self.network, &route)?;
        info!(from, to, distance = route.distance, hops = route.hops(), "route computed");
        Ok(RouteReport {
            from: from.to_owned(),
            to: to.to_owned(),
            route,
            view,
        })
    }

    /// Run one command against the session.
    pub fn execute(&mut self, command: Command) -> AppResult<Reply> {
        match command {
            Command::Road(form) => self.submit_road(&form).map(Reply::RoadAdded),
            Command::Network => self.network_listing().map(Reply::Network),
            Command::Locations => Ok(Reply::Locations(self.locations())),
            Command::View => self.view().map(Reply::View),
            Command::Route { from, to } => self.compute_route(&from, &to).map(Reply::Route),
            Command::Help => Ok(Reply::Help),
            Command::Quit => Ok(Reply::Quit),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!(
            locations = self.network.location_count(),
            roads = self.network.road_count(),
            "session ended"
        );
    }
}
