//! glide_charts
//!
//! Rolling time-series charts for Glide.
//!
//! A [`ScrollingChart`] keeps a fixed number of screen-space segments. When
//! it is full, appending evicts the oldest segment and scrolls the rest left
//! by rebasing its [`LinearScale`] instead of re-mapping history.

pub mod scale;
pub mod scrolling;
pub mod view;

pub use scale::LinearScale;
pub use scrolling::{AxisGuides, ChartStyle, ScrollingChart};
pub use view::{Axes, Window};

/// Common imports for chart users.
pub mod prelude {
    pub use crate::scale::LinearScale;
    pub use crate::scrolling::{AxisGuides, ChartStyle, ScrollingChart};
    pub use crate::view::{Axes, Window};
}
