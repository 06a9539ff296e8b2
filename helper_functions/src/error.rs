use parse_display::Display;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum Error {
    #[error("{0} is invalid")]
    SignatureInvalid(SignatureKind),
    #[error("{kind} could not be decoded: {source}")]
    SignatureUndecodable {
        kind: SignatureKind,
        source: bls::Error,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum SignatureKind {
    #[display("collection of multiple signatures")]
    Multi,
    #[display("proposal signature")]
    Proposal,
    #[display("voluntary exit signature")]
    VoluntaryExit,
}
