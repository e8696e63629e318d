//! Decoder and checksum verifier for eUICC IDentifiers (EIDs), the 32-digit
//! identifiers of embedded SIMs in the GSMA SGP.02 / SGP.22 remote
//! provisioning specifications.

pub mod eid;

pub use eid::{decode_and_verify, EidError, EidRecord};
