//! Client core for the Nasma metrics dashboard
//!
//! Holds the stateful heart of the page: the date-range filter, the
//! full-dashboard refresh cycle, the chart registry, the card layout
//! controller, the theme preference, and the ease-comparison editor. The
//! charting library, the drag/resize library, and the browser storage
//! object stay behind traits.

pub mod ease;
pub mod fetch;
pub mod filter;
pub mod format;
pub mod layout;
pub mod refresh;
pub mod registry;
pub mod render;
pub mod theme;

pub use ease::{EaseEditor, EaseSeries};
pub use fetch::{HttpMetricClient, MetricClient};
pub use filter::{FilterDescription, FilterState};
pub use layout::{edit_mode_from_query, CardLayoutController, CardRect};
pub use refresh::{Dashboard, RefreshState};
pub use registry::{ChartBackend, ChartHandle, ChartRegistry, ChartSlot};
pub use render::CoverageView;
pub use theme::{Theme, ThemePreference};
