//! Concrete waveform view collaborators.
//!
//! These hold the presentation state of each view (visible range, highlight,
//! scrollbar link) and their lifecycle flags. Pixel-level drawing lives with
//! the embedding application, not here.

mod overview;
mod scrollbar;
mod zoomview;

pub use overview::WaveformOverview;
pub use scrollbar::Scrollbar;
pub use zoomview::WaveformZoomView;

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::ViewerHost;
use crate::traits::{
    SharedOverview, SharedScrollbar, SharedZoomview, ViewContainer, ViewFactory,
};
use crate::waveform::WaveformData;

/// Builds the concrete views of this crate.
#[derive(Default)]
pub struct WaveformViewFactory;

impl ViewFactory for WaveformViewFactory {
    fn create_overview(
        &self,
        data: Rc<WaveformData>,
        container: ViewContainer,
        host: Rc<dyn ViewerHost>,
    ) -> SharedOverview {
        Rc::new(RefCell::new(WaveformOverview::new(data, container, host)))
    }

    fn create_zoomview(
        &self,
        data: Rc<WaveformData>,
        container: ViewContainer,
        host: Rc<dyn ViewerHost>,
    ) -> SharedZoomview {
        Rc::new(RefCell::new(WaveformZoomView::new(data, container, host)))
    }

    fn create_scrollbar(
        &self,
        container: ViewContainer,
        host: Rc<dyn ViewerHost>,
    ) -> SharedScrollbar {
        Rc::new(RefCell::new(Scrollbar::new(container, host)))
    }
}
