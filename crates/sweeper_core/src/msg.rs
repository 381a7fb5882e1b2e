#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A non-empty line arrived on the control channel.
    ControlLine(String),
    /// The control channel was closed by the producer.
    InputClosed,
    /// A scan read one listing off the page.
    ListingScanned(crate::ListingView),
}
