#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Restore the persisted endpoint value at startup.
    EndpointRestored(String),
    /// User edited the endpoint input box.
    EndpointEdited(String),
    /// User clicked Connect.
    ConnectClicked,
    /// Host identity capability produced the signed-in email.
    IdentityResolved { email: String },
    /// Summary fetch finished successfully.
    SummaryReceived { summary: crate::SummaryView },
    /// Some step of the connect cycle failed; `message` is displayed as-is.
    ConnectFailed { message: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
