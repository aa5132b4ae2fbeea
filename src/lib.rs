pub mod host;
pub mod options;
pub mod settings;
pub mod synthetic;
pub mod traits;
pub mod view_controller;
pub mod views;
pub mod waveform;

// Export view contracts
pub use traits::{
    OverviewView, ScrollbarView, SharedOverview, SharedScrollbar, SharedZoomview,
    ViewContainer, ViewFactory, ViewHandle, ViewKind, WeakZoomview, ZoomviewView,
};

// Export the coordinator
pub use view_controller::ViewController;

// Export concrete views
pub use views::{Scrollbar, WaveformOverview, WaveformViewFactory, WaveformZoomView};

// Export host context
pub use host::{Viewer, ViewerHost};

// Export data model
pub use waveform::{WaveformChannel, WaveformData};

// Export synthetic generation
pub use synthetic::SyntheticWaveform;

// Export configuration support
pub use options::{hex_to_color32, ViewerOptions};
pub use settings::{OptionsStore, OPTIONS_STORAGE_KEY};
