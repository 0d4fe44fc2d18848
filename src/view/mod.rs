/// View layer: maps a view identifier to a plain render descriptor.
///
/// ```text
///   "top_affordable" ──parse──▶ ViewKind ──describe(&Dataset)──▶ RenderDescriptor
/// ```
///
/// Nothing here draws; the descriptor is consumed by `ui::chart` or
/// serialized for headless use.

pub mod descriptor;
pub mod kind;
pub mod select;

pub use descriptor::{ChartKind, RenderDescriptor};
pub use kind::ViewKind;
pub use select::select_view;
