/// How an input shows its validation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Show the message next to the field along with the invalid marker (default).
    #[default]
    Message,
    /// No message; the field only carries the invalid marker.
    MarkerOnly,
}
