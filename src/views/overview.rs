//! Whole-track overview waveform view.
//!
//! Shows the entire signal and carries the highlight rectangle marking the
//! time range the zoom view currently displays.

use std::rc::Rc;

use egui::Color32;
use tracing::debug;

use crate::host::ViewerHost;
use crate::traits::{OverviewView, ViewContainer};
use crate::waveform::WaveformData;

pub struct WaveformOverview {
    data: Rc<WaveformData>,
    container: ViewContainer,
    waveform_color: Color32,
    highlight_color: Color32,

    /// Highlighted time range in seconds, ordered and clamped to the
    /// waveform duration
    highlight: Option<(f64, f64)>,

    destroyed: bool,
}

impl WaveformOverview {
    pub fn new(data: Rc<WaveformData>, container: ViewContainer, host: Rc<dyn ViewerHost>) -> Self {
        let options = host.options();
        debug!(container = ?container.id(), "creating overview view");

        Self {
            waveform_color: options.waveform_color32(),
            highlight_color: options.highlight_color32(),
            data,
            container,
            highlight: None,
            destroyed: false,
        }
    }

    /// The current highlight range, if one is shown.
    pub fn highlight(&self) -> Option<(f64, f64)> {
        self.highlight
    }

    pub fn container(&self) -> ViewContainer {
        self.container
    }

    pub fn waveform_color(&self) -> Color32 {
        self.waveform_color
    }

    pub fn highlight_color(&self) -> Color32 {
        self.highlight_color
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl OverviewView for WaveformOverview {
    fn show_highlight(&mut self, start_time: f64, end_time: f64) {
        let duration = self.data.duration();
        let (start, end) = if start_time <= end_time {
            (start_time, end_time)
        } else {
            (end_time, start_time)
        };

        let start = start.clamp(0.0, duration);
        let end = end.clamp(0.0, duration);

        debug!(start, end, "overview highlight shown");
        self.highlight = Some((start, end));
    }

    fn remove_highlight_rect(&mut self) {
        debug!("overview highlight removed");
        self.highlight = None;
    }

    fn destroy(&mut self) {
        debug!("destroying overview view");
        self.highlight = None;
        self.destroyed = true;
    }
}
