//! Host context supplying shared data to the views.
//!
//! The view controller and the views never reach for globals; they are handed
//! a host capability object at construction and call its accessors
//! synchronously.

use std::rc::Rc;

use crate::options::ViewerOptions;
use crate::waveform::WaveformData;

/// Capability object giving views access to the shared waveform data and
/// configuration of the embedding application.
pub trait ViewerHost {
    /// The decoded waveform data all views render from.
    fn waveform_data(&self) -> Rc<WaveformData>;

    /// Shared view configuration.
    fn options(&self) -> &ViewerOptions;
}

/// Default host: owns the waveform data and options directly.
pub struct Viewer {
    data: Rc<WaveformData>,
    options: ViewerOptions,
}

impl Viewer {
    pub fn new(data: WaveformData, options: ViewerOptions) -> Self {
        Self {
            data: Rc::new(data),
            options,
        }
    }

    /// Builds a host around already-shared waveform data.
    pub fn with_shared_data(data: Rc<WaveformData>, options: ViewerOptions) -> Self {
        Self { data, options }
    }
}

impl ViewerHost for Viewer {
    fn waveform_data(&self) -> Rc<WaveformData> {
        Rc::clone(&self.data)
    }

    fn options(&self) -> &ViewerOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthetic::SyntheticWaveform;

    #[test]
    fn test_waveform_data_is_shared() {
        let data = SyntheticWaveform::new().generate().unwrap();
        let viewer = Viewer::new(data, ViewerOptions::default());

        let a = viewer.waveform_data();
        let b = viewer.waveform_data();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_options_accessor() {
        let data = SyntheticWaveform::new().generate().unwrap();
        let options = ViewerOptions {
            zoomview_span_secs: 3.0,
            ..Default::default()
        };
        let viewer = Viewer::new(data, options);

        assert_eq!(viewer.options().zoomview_span_secs, 3.0);
    }
}
