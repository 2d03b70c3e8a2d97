//! Named view states and the small bits of page-model logic.

/// The finite set of views the application can show. There is no history
/// stack; [`crate::viewer::Viewer::go_to`] is the single transition path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Ark,
    Drone,
}

/// Tab modes of the HUD simulator on the drone page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudMode {
    Commute,
    Sightseeing,
    Emergency,
}

impl HudMode {
    pub const ALL: [HudMode; 3] = [HudMode::Commute, HudMode::Sightseeing, HudMode::Emergency];

    pub fn label(self) -> &'static str {
        match self {
            HudMode::Commute => "COMMUTE",
            HudMode::Sightseeing => "SIGHTSEEING",
            HudMode::Emergency => "EMERGENCY",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            HudMode::Commute => "⚡",
            HudMode::Sightseeing => "📍",
            HudMode::Emergency => "⚠",
        }
    }
}

/// One selectable close-up in the drone viewport.
pub struct DroneView {
    pub title: &'static str,
    pub caption: &'static str,
}

pub const DRONE_VIEWS: [DroneView; 3] = [
    DroneView {
        title: "Bionic dragonfly wing",
        caption: "Wing lattice under structural scan",
    },
    DroneView {
        title: "Core reactor unit",
        caption: "Sealed micro-reactor stack",
    },
    DroneView {
        title: "Thrust nozzle array",
        caption: "Vector nozzles, rear quarter view",
    },
];

/// Toggles a viewport thumbnail: selecting the one that is already active
/// returns to the default view, anything else becomes the new selection.
pub fn toggle_view(active: Option<usize>, clicked: usize) -> Option<usize> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// The close-up shown in the main viewport. `None` falls back to the first
/// view.
pub fn current_view(active: Option<usize>) -> &'static DroneView {
    &DRONE_VIEWS[active.unwrap_or(0)]
}
