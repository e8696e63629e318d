use std::fmt;

use num_bigint::BigUint;
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

const EID_LENGTH: usize = 32;
const E118_SCHEME: &str = "89";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EidError {
    #[error("EID is not numeric")]
    NotNumeric,
    #[error("EID is {0} characters instead of 32")]
    InvalidLength(usize),
    #[error("EID is not using the ITU-T E.118 based scheme")]
    InvalidScheme,
}

/// The decoded subfields of an EID, plus the outcome of the check digit
/// verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EidRecord {
    pub industry_identifier: String,
    pub country_code: String,
    pub issuer_identifier: String,
    pub platform_and_os_versions: String,
    pub additional_issuer_info: String,
    pub individual_identification_number: String,
    pub check_digits: String,
    pub verification_successful: bool,
}

/// Decode and verify an eUICC IDentifier (EID) as used for Remote
/// Provisioning and Management of the eUICC (eSIM) according to GSM
/// Association Official Documents SGP.02 (Remote Provisioning of Embedded
/// UICC Technical Specification) and SGP.22 (RSP Technical Specification).
/// EIDs follow the scheme of ITU-T Recommendation E.118 (the international
/// telecommunication charge card), including its modulo-97 check digits.
///
/// A checksum mismatch is not an error: the record is still returned, with
/// `verification_successful` set to `false`, so callers can tell a
/// malformed string apart from a well-formed but altered one.
pub fn decode_and_verify(eid: &str) -> Result<EidRecord, EidError> {
    if !eid.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EidError::NotNumeric);
    }
    if eid.len() != EID_LENGTH {
        return Err(EidError::InvalidLength(eid.len()));
    }
    if &eid[..2] != E118_SCHEME {
        return Err(EidError::InvalidScheme);
    }

    // The 2 check digits are calculated as follows:
    // 1. Replace the 2 check digits by 2 digits of 0
    // 2. Using the resulting 32 digits as a decimal integer
    // 3. Compute the remainder of that number on division by 97
    // 4. Subtract the remainder from 98, and use the decimal result for
    //    the 2 check digits
    //
    // The zeroed value reaches 10^32 and overflows 64-bit arithmetic,
    // hence the BigUint. Both parses operate on already validated digits
    // and cannot fail.
    let zeroed: BigUint = format!("{}00", &eid[..30])
        .parse()
        .map_err(|_| EidError::NotNumeric)?;
    let expected = BigUint::from(98u32) - zeroed % 97u32;
    let embedded: BigUint = eid[30..].parse().map_err(|_| EidError::NotNumeric)?;

    Ok(EidRecord {
        industry_identifier: eid[..2].to_string(),
        country_code: eid[2..5].to_string(),
        issuer_identifier: eid[5..8].to_string(),
        platform_and_os_versions: eid[8..13].to_string(),
        additional_issuer_info: eid[13..18].to_string(),
        individual_identification_number: eid[18..30].to_string(),
        check_digits: eid[30..].to_string(),
        verification_successful: embedded == expected,
    })
}

impl fmt::Display for EidRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<35}{}", "Industry identifier", self.industry_identifier)?;
        writeln!(f, "{:<35}{}", "Country code", self.country_code)?;
        writeln!(f, "{:<35}{}", "Issuer identifier", self.issuer_identifier)?;
        writeln!(f, "{:<35}{}", "Platform and OS versions", self.platform_and_os_versions)?;
        writeln!(f, "{:<35}{}", "Additional issuer info", self.additional_issuer_info)?;
        writeln!(
            f,
            "{:<35}{}",
            "Individual identification number", self.individual_identification_number
        )?;
        writeln!(f, "{:<35}{}", "Check digits", self.check_digits)?;
        writeln!(f, "{:<35}{}", "Verification successful", self.verification_successful)
    }
}
