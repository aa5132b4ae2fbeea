//! Scrollbar panning the zoom view.

use std::rc::{Rc, Weak};

use tracing::debug;

use crate::host::ViewerHost;
use crate::traits::{ScrollbarView, SharedZoomview, ViewContainer, WeakZoomview};

pub struct Scrollbar {
    container: ViewContainer,
    min_thumb_width: f32,

    // Non-owning link to the zoom view this scrollbar pans
    zoomview: Option<WeakZoomview>,

    destroyed: bool,
}

impl Scrollbar {
    pub fn new(container: ViewContainer, host: Rc<dyn ViewerHost>) -> Self {
        debug!(container = ?container.id(), "creating scrollbar");

        Self {
            container,
            min_thumb_width: host.options().scrollbar_min_width,
            zoomview: None,
            destroyed: false,
        }
    }

    /// The zoom view this scrollbar is linked to, if it is still alive.
    pub fn linked_zoomview(&self) -> Option<SharedZoomview> {
        self.zoomview.as_ref().and_then(Weak::upgrade)
    }

    pub fn container(&self) -> ViewContainer {
        self.container
    }

    pub fn min_thumb_width(&self) -> f32 {
        self.min_thumb_width
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl ScrollbarView for Scrollbar {
    fn set_zoomview(&mut self, zoomview: WeakZoomview) {
        debug!("scrollbar linked to zoomview");
        self.zoomview = Some(zoomview);
    }

    fn destroy(&mut self) {
        debug!("destroying scrollbar");
        self.zoomview = None;
        self.destroyed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Viewer;
    use crate::options::ViewerOptions;
    use crate::synthetic::SyntheticWaveform;
    use crate::views::WaveformZoomView;
    use std::cell::RefCell;

    fn host() -> Rc<Viewer> {
        let data = SyntheticWaveform::new().generate().unwrap();
        Rc::new(Viewer::new(data, ViewerOptions::default()))
    }

    #[test]
    fn test_unlinked_by_default() {
        let scrollbar = Scrollbar::new(ViewContainer::new("scrollbar-test"), host());
        assert!(scrollbar.linked_zoomview().is_none());
    }

    #[test]
    fn test_link_and_upgrade() {
        let host = host();
        let zoomview: SharedZoomview = Rc::new(RefCell::new(WaveformZoomView::new(
            host.waveform_data(),
            ViewContainer::new("zoomview-test"),
            Rc::clone(&host) as Rc<dyn ViewerHost>,
        )));

        let mut scrollbar = Scrollbar::new(ViewContainer::new("scrollbar-test"), host);
        scrollbar.set_zoomview(Rc::downgrade(&zoomview));

        let linked = scrollbar.linked_zoomview().unwrap();
        assert!(Rc::ptr_eq(&linked, &zoomview));
    }

    #[test]
    fn test_link_does_not_keep_zoomview_alive() {
        let host = host();
        let zoomview: SharedZoomview = Rc::new(RefCell::new(WaveformZoomView::new(
            host.waveform_data(),
            ViewContainer::new("zoomview-test"),
            Rc::clone(&host) as Rc<dyn ViewerHost>,
        )));

        let mut scrollbar = Scrollbar::new(ViewContainer::new("scrollbar-test"), host);
        scrollbar.set_zoomview(Rc::downgrade(&zoomview));

        drop(zoomview);
        assert!(scrollbar.linked_zoomview().is_none());
    }

    #[test]
    fn test_destroy_clears_link() {
        let host = host();
        let zoomview: SharedZoomview = Rc::new(RefCell::new(WaveformZoomView::new(
            host.waveform_data(),
            ViewContainer::new("zoomview-test"),
            Rc::clone(&host) as Rc<dyn ViewerHost>,
        )));

        let mut scrollbar = Scrollbar::new(ViewContainer::new("scrollbar-test"), host);
        scrollbar.set_zoomview(Rc::downgrade(&zoomview));

        scrollbar.destroy();
        assert!(scrollbar.is_destroyed());
        assert!(scrollbar.linked_zoomview().is_none());
    }
}
