pub mod appointment;
pub mod column;
pub mod filter;
pub mod inquiry;

/// Common surface of both record shapes: the unique join/selection key and
/// the transient selection flag mirrored between the full collection and the
/// current view.
pub trait Row: Clone {
    fn id(&self) -> &str;
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);
}
