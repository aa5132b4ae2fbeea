//! Zoomed-in waveform view.
//!
//! Displays a bounded time range of the signal. The visible range can be
//! moved programmatically; pointer-driven zoom and pan belong to the
//! embedding application.

use std::rc::Rc;

use egui::Color32;
use tracing::debug;

use crate::host::ViewerHost;
use crate::traits::{ViewContainer, ZoomviewView};
use crate::waveform::WaveformData;

pub struct WaveformZoomView {
    data: Rc<WaveformData>,
    container: ViewContainer,
    color: Color32,

    // Visible time range in seconds, kept ordered within [0, duration]
    start_time: f64,
    end_time: f64,

    destroyed: bool,
}

impl WaveformZoomView {
    /// Creates a zoom view showing the first `zoomview_span_secs` seconds of
    /// the waveform (or all of it, when shorter).
    pub fn new(data: Rc<WaveformData>, container: ViewContainer, host: Rc<dyn ViewerHost>) -> Self {
        let options = host.options();
        let span = options.zoomview_span_secs.max(0.0);
        let end_time = data.duration().min(span);

        debug!(container = ?container.id(), end_time, "creating zoomview");

        Self {
            color: options.zoomview_color32(),
            data,
            container,
            start_time: 0.0,
            end_time,
            destroyed: false,
        }
    }

    /// Moves the visible range, ordering the endpoints and clamping them to
    /// the waveform duration.
    pub fn set_visible_range(&mut self, start_time: f64, end_time: f64) {
        let duration = self.data.duration();
        let (start, end) = if start_time <= end_time {
            (start_time, end_time)
        } else {
            (end_time, start_time)
        };

        self.start_time = start.clamp(0.0, duration);
        self.end_time = end.clamp(0.0, duration);
        debug!(start = self.start_time, end = self.end_time, "zoomview range moved");
    }

    pub fn container(&self) -> ViewContainer {
        self.container
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl ZoomviewView for WaveformZoomView {
    fn start_time(&self) -> f64 {
        self.start_time
    }

    fn end_time(&self) -> f64 {
        self.end_time
    }

    fn destroy(&mut self) {
        debug!("destroying zoomview");
        self.destroyed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Viewer;
    use crate::options::ViewerOptions;
    use crate::synthetic::SyntheticWaveform;

    fn zoomview_with_span(span: f64) -> WaveformZoomView {
        let data = SyntheticWaveform::new().generate().unwrap();
        let options = ViewerOptions {
            zoomview_span_secs: span,
            ..Default::default()
        };
        let host = Rc::new(Viewer::new(data, options));
        WaveformZoomView::new(
            host.waveform_data(),
            ViewContainer::new("zoomview-test"),
            host,
        )
    }

    #[test]
    fn test_initial_range_uses_configured_span() {
        // Default synthetic waveform lasts 1000 * 512 / 44100 ~= 11.6s
        let view = zoomview_with_span(5.0);
        assert_eq!(view.start_time(), 0.0);
        assert_eq!(view.end_time(), 5.0);
    }

    #[test]
    fn test_initial_range_clamped_to_duration() {
        let view = zoomview_with_span(1e6);
        let duration = SyntheticWaveform::new().generate().unwrap().duration();
        assert_eq!(view.end_time(), duration);
    }

    #[test]
    fn test_set_visible_range_clamps_and_orders() {
        let mut view = zoomview_with_span(5.0);
        let duration = SyntheticWaveform::new().generate().unwrap().duration();

        view.set_visible_range(8.0, 2.0);
        assert_eq!((view.start_time(), view.end_time()), (2.0, 8.0));

        view.set_visible_range(-5.0, duration + 5.0);
        assert_eq!((view.start_time(), view.end_time()), (0.0, duration));
    }

    #[test]
    fn test_destroy_flags_view() {
        let mut view = zoomview_with_span(5.0);
        assert!(!view.is_destroyed());
        view.destroy();
        assert!(view.is_destroyed());
    }
}
