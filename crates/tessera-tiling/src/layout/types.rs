//! Layout engine settings.

/// Turns a split tree into pane rectangles. Both spacings are in pixels and
/// default to zero, so panes tile the viewport edge to edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutEngine {
    /// Space between sibling panes.
    pub gap: u32,
    /// Space between the viewport edge and the outermost panes.
    pub outer_padding: u32,
}
