//! The seam to the external page-flip widget.

/// What the external flip widget must provide. The widget owns the
/// animation; this trait only exposes its queries and commands.
pub trait FlipEngine {
    fn page_count(&self) -> usize;
    fn current_index(&self) -> usize;
    fn flip_next(&mut self);
    fn flip_prev(&mut self);
    fn turn_to_page(&mut self, index: usize);
}
