//! Waveform view lifecycle coordination.
//!
//! [`ViewController`] owns at most one overview, one zoomview and one
//! scrollbar, creates them on demand, wires them to each other (overview
//! highlight, scrollbar link) and tears them down. It is the single owner of
//! every view it creates; lookups hand out shared references without
//! transferring that responsibility.

use std::rc::Rc;

use tracing::debug;

use crate::host::ViewerHost;
use crate::traits::{
    SharedOverview, SharedScrollbar, SharedZoomview, ViewContainer, ViewFactory, ViewHandle,
    ViewKind,
};
use crate::views::WaveformViewFactory;

/// Creates and manages the waveform views.
///
/// Views are created lazily on first request. `create_overview` and
/// `create_zoomview` are idempotent; `create_scrollbar` always builds a new
/// instance. Destruction is guarded: a single waveform view cannot be
/// destroyed while its counterpart is absent (only the controller-wide
/// [`destroy`](Self::destroy) tears views down unconditionally).
pub struct ViewController {
    host: Rc<dyn ViewerHost>,
    factory: Box<dyn ViewFactory>,
    overview: Option<SharedOverview>,
    zoomview: Option<SharedZoomview>,
    scrollbar: Option<SharedScrollbar>,
}

impl ViewController {
    /// Creates a controller using the crate's concrete views.
    pub fn new(host: Rc<dyn ViewerHost>) -> Self {
        Self::with_factory(host, Box::new(WaveformViewFactory))
    }

    /// Creates a controller with an injected view factory.
    pub fn with_factory(host: Rc<dyn ViewerHost>, factory: Box<dyn ViewFactory>) -> Self {
        Self {
            host,
            factory,
            overview: None,
            zoomview: None,
            scrollbar: None,
        }
    }

    // ===== View creation =====

    /// Creates the overview view, or returns the existing one.
    ///
    /// On fresh creation, if a zoom view already exists, the overview
    /// immediately shows its visible time range as the highlight. A repeated
    /// call returns the existing view unchanged; the container argument is
    /// ignored in that case.
    pub fn create_overview(&mut self, container: ViewContainer) -> SharedOverview {
        if let Some(overview) = &self.overview {
            return Rc::clone(overview);
        }

        let waveform_data = self.host.waveform_data();
        let overview = self
            .factory
            .create_overview(waveform_data, container, Rc::clone(&self.host));
        debug!("overview view created");

        if let Some(zoomview) = &self.zoomview {
            let (start_time, end_time) = {
                let zoomview = zoomview.borrow();
                (zoomview.start_time(), zoomview.end_time())
            };
            overview.borrow_mut().show_highlight(start_time, end_time);
        }

        self.overview = Some(Rc::clone(&overview));
        overview
    }

    /// Creates the zoom view, or returns the existing one.
    ///
    /// On fresh creation, if a scrollbar already exists, it is linked to the
    /// new zoom view. A repeated call returns the existing view unchanged;
    /// the container argument is ignored in that case.
    pub fn create_zoomview(&mut self, container: ViewContainer) -> SharedZoomview {
        if let Some(zoomview) = &self.zoomview {
            return Rc::clone(zoomview);
        }

        let waveform_data = self.host.waveform_data();
        let zoomview = self
            .factory
            .create_zoomview(waveform_data, container, Rc::clone(&self.host));
        debug!("zoomview created");

        if let Some(scrollbar) = &self.scrollbar {
            scrollbar.borrow_mut().set_zoomview(Rc::downgrade(&zoomview));
        }

        self.zoomview = Some(Rc::clone(&zoomview));
        zoomview
    }

    /// Creates a new scrollbar, replacing any previously stored one.
    ///
    /// The replaced instance is not destroyed; it is simply no longer the
    /// controller's scrollbar.
    pub fn create_scrollbar(&mut self, container: ViewContainer) -> SharedScrollbar {
        let scrollbar = self
            .factory
            .create_scrollbar(container, Rc::clone(&self.host));
        debug!(replacing = self.scrollbar.is_some(), "scrollbar created");

        self.scrollbar = Some(Rc::clone(&scrollbar));
        scrollbar
    }

    // ===== View destruction =====

    /// Destroys the overview view.
    ///
    /// Does nothing unless both the overview and the zoom view currently
    /// exist.
    pub fn destroy_overview(&mut self) {
        if self.overview.is_none() {
            return;
        }

        if self.zoomview.is_none() {
            debug!("destroy_overview skipped: no zoomview");
            return;
        }

        if let Some(overview) = self.overview.take() {
            overview.borrow_mut().destroy();
        }
    }

    /// Destroys the zoom view and clears the overview's highlight.
    ///
    /// Does nothing unless both the zoom view and the overview currently
    /// exist.
    pub fn destroy_zoomview(&mut self) {
        if self.zoomview.is_none() {
            return;
        }

        if self.overview.is_none() {
            debug!("destroy_zoomview skipped: no overview");
            return;
        }

        if let Some(zoomview) = self.zoomview.take() {
            zoomview.borrow_mut().destroy();
        }

        if let Some(overview) = &self.overview {
            overview.borrow_mut().remove_highlight_rect();
        }
    }

    /// Destroys whichever views exist, in fixed order: overview, zoomview,
    /// scrollbar. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if let Some(overview) = self.overview.take() {
            overview.borrow_mut().destroy();
        }

        if let Some(zoomview) = self.zoomview.take() {
            zoomview.borrow_mut().destroy();
        }

        if let Some(scrollbar) = self.scrollbar.take() {
            scrollbar.borrow_mut().destroy();
        }
    }

    // ===== Lookups =====

    /// Returns a view by kind, or, with no kind, the sole existing
    /// waveform view.
    ///
    /// The unspecified lookup is ambiguous when both views exist and empty
    /// when neither does; both cases return `None`.
    pub fn view(&self, kind: Option<ViewKind>) -> Option<ViewHandle> {
        match kind {
            None => match (&self.overview, &self.zoomview) {
                (Some(_), Some(_)) => None,
                (Some(overview), None) => Some(ViewHandle::Overview(Rc::clone(overview))),
                (None, Some(zoomview)) => Some(ViewHandle::Zoomview(Rc::clone(zoomview))),
                (None, None) => None,
            },
            Some(ViewKind::Overview) => self
                .overview
                .as_ref()
                .map(|view| ViewHandle::Overview(Rc::clone(view))),
            Some(ViewKind::Zoomview) => self
                .zoomview
                .as_ref()
                .map(|view| ViewHandle::Zoomview(Rc::clone(view))),
        }
    }

    /// String-facing variant of [`view`](Self::view): `"overview"` and
    /// `"zoomview"` select a view; any other name yields `None`, the same
    /// answer as for a view that has not been created.
    pub fn view_by_name(&self, name: Option<&str>) -> Option<ViewHandle> {
        match name {
            None => self.view(None),
            Some(name) => ViewKind::from_name(name).and_then(|kind| self.view(Some(kind))),
        }
    }

    /// Returns the current scrollbar, if one exists.
    pub fn scrollbar(&self) -> Option<SharedScrollbar> {
        self.scrollbar.as_ref().map(Rc::clone)
    }
}
