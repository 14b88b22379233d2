pub mod border;
pub mod color;
pub mod layout;
pub mod resolved;
pub mod spacing;
pub mod stylesheet;
pub mod typography;

pub use border::{Border, BorderStyle, RadiusValue};
pub use color::{ColorValue, gradient, resolve_color};
pub use layout::{AlignItems, Display, FlexDirection, FlexWrap, JustifyContent, LayoutStyle};
pub use resolved::{ResolvedStyle, resolve_style};
pub use spacing::{Spacing, SpacingValue};
pub use stylesheet::{Background, ImageRepeat, ImageSize, PageStyle, merge_page_styles};
pub use typography::{TextAlign, TextTransform, Typography};
