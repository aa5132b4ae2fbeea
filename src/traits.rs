//! Contracts between the view controller and its collaborator views.
//!
//! The controller only ever talks to the views through these traits, which
//! keeps the lifecycle logic independent of any concrete rendering backend
//! and lets tests substitute recording implementations.

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::{Rc, Weak};

use crate::host::ViewerHost;
use crate::waveform::WaveformData;

/// Shared handle to an overview collaborator.
pub type SharedOverview = Rc<RefCell<dyn OverviewView>>;
/// Shared handle to a zoomview collaborator.
pub type SharedZoomview = Rc<RefCell<dyn ZoomviewView>>;
/// Shared handle to a scrollbar collaborator.
pub type SharedScrollbar = Rc<RefCell<dyn ScrollbarView>>;
/// Non-owning handle to a zoomview, held by the scrollbar.
pub type WeakZoomview = Weak<RefCell<dyn ZoomviewView>>;

/// Opaque rendering-surface handle a view is attached to.
///
/// Views and the controller pass this through uninterpreted; in an egui
/// application it identifies the UI region the view draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewContainer(egui::Id);

impl ViewContainer {
    pub fn new(source: impl Hash) -> Self {
        Self(egui::Id::new(source))
    }

    pub fn id(&self) -> egui::Id {
        self.0
    }
}

impl From<egui::Id> for ViewContainer {
    fn from(id: egui::Id) -> Self {
        Self(id)
    }
}

/// Whole-track overview view with a highlight rectangle marking the time
/// range the zoom view currently displays.
pub trait OverviewView {
    /// Shows (or moves) the highlight over `[start_time, end_time]` seconds.
    fn show_highlight(&mut self, start_time: f64, end_time: f64);

    /// Removes the highlight rectangle.
    fn remove_highlight_rect(&mut self);

    /// Releases the view's resources. Called exactly once, by the owner.
    fn destroy(&mut self);
}

/// Zoomed-in view over a bounded time range of the signal.
pub trait ZoomviewView {
    /// Start of the visible time range in seconds.
    fn start_time(&self) -> f64;

    /// End of the visible time range in seconds.
    fn end_time(&self) -> f64;

    /// Releases the view's resources. Called exactly once, by the owner.
    fn destroy(&mut self);
}

/// Scrollbar panning a linked zoom view.
pub trait ScrollbarView {
    /// Links the scrollbar to the zoom view it pans, replacing any
    /// previous link.
    fn set_zoomview(&mut self, zoomview: WeakZoomview);

    /// Releases the view's resources. Called exactly once, by the owner.
    fn destroy(&mut self);
}

/// Selector naming one of the two waveform views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Overview,
    Zoomview,
}

impl ViewKind {
    /// Parses the user-facing view name; anything other than `"overview"`
    /// or `"zoomview"` is unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "overview" => Some(Self::Overview),
            "zoomview" => Some(Self::Zoomview),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Zoomview => "zoomview",
        }
    }
}

/// A reference to whichever waveform view a lookup produced.
#[derive(Clone)]
pub enum ViewHandle {
    Overview(SharedOverview),
    Zoomview(SharedZoomview),
}

impl ViewHandle {
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Overview(_) => ViewKind::Overview,
            Self::Zoomview(_) => ViewKind::Zoomview,
        }
    }

    pub fn as_overview(&self) -> Option<&SharedOverview> {
        match self {
            Self::Overview(view) => Some(view),
            Self::Zoomview(_) => None,
        }
    }

    pub fn as_zoomview(&self) -> Option<&SharedZoomview> {
        match self {
            Self::Overview(_) => None,
            Self::Zoomview(view) => Some(view),
        }
    }
}

/// Constructs the collaborator views the controller manages.
///
/// The default implementation builds the concrete views of this crate;
/// tests inject recording factories instead.
pub trait ViewFactory {
    fn create_overview(
        &self,
        data: Rc<WaveformData>,
        container: ViewContainer,
        host: Rc<dyn ViewerHost>,
    ) -> SharedOverview;

    fn create_zoomview(
        &self,
        data: Rc<WaveformData>,
        container: ViewContainer,
        host: Rc<dyn ViewerHost>,
    ) -> SharedZoomview;

    fn create_scrollbar(&self, container: ViewContainer, host: Rc<dyn ViewerHost>)
        -> SharedScrollbar;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_kind_from_name() {
        assert_eq!(ViewKind::from_name("overview"), Some(ViewKind::Overview));
        assert_eq!(ViewKind::from_name("zoomview"), Some(ViewKind::Zoomview));
        assert_eq!(ViewKind::from_name("bogus"), None);
        assert_eq!(ViewKind::from_name("Overview"), None);
        assert_eq!(ViewKind::from_name(""), None);
    }

    #[test]
    fn test_view_kind_name_round_trip() {
        for kind in [ViewKind::Overview, ViewKind::Zoomview] {
            assert_eq!(ViewKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_view_container_equality() {
        let a = ViewContainer::new("overview-container");
        let b = ViewContainer::new("overview-container");
        let c = ViewContainer::new("zoomview-container");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(ViewContainer::from(a.id()), a);
    }
}
