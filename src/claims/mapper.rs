//! Deterministic encounter→claim synthesis.
//!
//! Service and provider codes are derived from free-text fields with a fixed,
//! documented hash so the same input always yields the same code, across runs
//! and platforms. The amounts are a complexity proxy (longer diagnosis, higher
//! charge), not a real tariff.

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::models::claim::{PRIORITY_NORMAL, RESOURCE_TYPE, USE_CLAIM};
use crate::models::{
    Claim, ClaimItem, ClaimStatus, CodeableConcept, Coding, Encounter, Money, Patient, Reference,
};

pub const CLAIM_TYPE_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/claim-type";
pub const CLAIM_TYPE_INSTITUTIONAL: &str = "institutional";
pub const SERVICE_CODE_SYSTEM: &str = "http://example.org/local-codes";

/// Flat base charge every claim starts from, in USD.
pub const BASE_AMOUNT: f64 = 100.0;

/// Diagnosis length is scaled by this divisor into the complexity factor.
const COMPLEXITY_DIVISOR: f64 = 20.0;

/// Stable hash backing the synthetic codes: SHA-256 over the UTF-8 bytes,
/// first 8 digest bytes read as a big-endian `u64`.
fn stable_hash(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// 3-digit synthetic service code for a diagnosis, e.g. `TREAT996`.
fn service_code(diagnosis: &str) -> String {
    format!("TREAT{:03}", stable_hash(diagnosis) % 1000)
}

/// 4-digit synthetic practitioner id for a clinician name.
fn provider_code(clinician: &str) -> u64 {
    stable_hash(clinician) % 10_000
}

/// Charge derived from diagnosis length: `base * (1 + len/20)`, rounded to
/// 2 decimals. `"Hypertension"` (12 chars) prices at 160.00.
fn derived_total(diagnosis: &str) -> f64 {
    let complexity = diagnosis.chars().count() as f64 / COMPLEXITY_DIVISOR;
    let total = BASE_AMOUNT * (1.0 + complexity);
    (total * 100.0).round() / 100.0
}

/// Synthesize a claim preview from an encounter and its owning patient.
///
/// Pure apart from the `created` timestamp. No identity is assigned; the
/// result is a transient document until submitted through the lifecycle
/// manager.
pub fn claim_from_encounter(encounter: &Encounter, patient: &Patient) -> Claim {
    let total = derived_total(&encounter.diagnosis);
    let provider = encounter
        .attending_clinician
        .as_deref()
        .map(|name| Reference::practitioner(provider_code(name)));

    Claim {
        resource_type: RESOURCE_TYPE.to_string(),
        id: None,
        status: ClaimStatus::Active,
        type_: CodeableConcept {
            coding: vec![Coding {
                system: Some(CLAIM_TYPE_SYSTEM.to_string()),
                code: CLAIM_TYPE_INSTITUTIONAL.to_string(),
            }],
        },
        patient: Reference::patient(patient.id),
        encounter: Reference::encounter(encounter.id),
        created: Utc::now(),
        provider,
        use_: USE_CLAIM.to_string(),
        priority: CodeableConcept {
            coding: vec![Coding {
                system: None,
                code: PRIORITY_NORMAL.to_string(),
            }],
        },
        item: vec![ClaimItem {
            sequence: 1,
            product_or_service: CodeableConcept {
                coding: vec![Coding {
                    system: Some(SERVICE_CODE_SYSTEM.to_string()),
                    code: service_code(&encounter.diagnosis),
                }],
            },
            serviced_date: encounter.visit_date,
            unit_price: Money::usd(total),
            net: Money::usd(total),
        }],
        total: Money::usd(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn fixtures(diagnosis: &str, clinician: Option<&str>) -> (Encounter, Patient) {
        let patient = Patient {
            id: Uuid::new_v4(),
            full_name: "Amina Diallo".into(),
            age: 34,
            gender: Gender::Female,
            chief_complaint: "Headache".into(),
            created_at: Utc::now(),
        };
        let encounter = Encounter {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            diagnosis: diagnosis.into(),
            treatment: "Rest".into(),
            visit_date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            attending_clinician: clinician.map(String::from),
            total_price: 0.0,
            created_at: Utc::now(),
        };
        (encounter, patient)
    }

    #[test]
    fn hypertension_prices_at_160() {
        let (enc, pat) = fixtures("Hypertension", None);
        let claim = claim_from_encounter(&enc, &pat);
        assert_eq!(claim.total.value, 160.0);
        assert_eq!(claim.item[0].unit_price.value, 160.0);
        assert_eq!(claim.item[0].net.value, 160.0);
        assert_eq!(claim.total.currency, "USD");
    }

    #[test]
    fn pricing_scales_with_diagnosis_length() {
        // 3 chars: 100 * (1 + 3/20) = 115.00
        let (enc, pat) = fixtures("Flu", None);
        assert_eq!(claim_from_encounter(&enc, &pat).total.value, 115.0);
    }

    #[test]
    fn service_codes_are_fixed_by_diagnosis() {
        assert_eq!(service_code("Hypertension"), "TREAT996");
        assert_eq!(service_code("Flu"), "TREAT943");
        assert_eq!(service_code("Malaria"), "TREAT510");
    }

    #[test]
    fn same_diagnosis_same_code_across_syntheses() {
        let (enc, pat) = fixtures("Chronic migraine with aura", None);
        let first = claim_from_encounter(&enc, &pat);
        let second = claim_from_encounter(&enc, &pat);
        assert_eq!(
            first.item[0].product_or_service.coding[0].code,
            second.item[0].product_or_service.coding[0].code
        );
        assert_eq!(first.total.value, second.total.value);
    }

    #[test]
    fn provider_reference_present_iff_clinician() {
        let (enc, pat) = fixtures("Malaria", Some("Dr. Mensah"));
        let claim = claim_from_encounter(&enc, &pat);
        assert_eq!(
            claim.provider.as_ref().map(|r| r.reference.as_str()),
            Some("Practitioner/5202")
        );

        let (enc, pat) = fixtures("Malaria", None);
        assert!(claim_from_encounter(&enc, &pat).provider.is_none());
    }

    #[test]
    fn provider_reference_shape_is_four_digits() {
        let shape = regex::Regex::new(r"^Practitioner/\d{4}$").unwrap();
        for name in ["Dr. Okafor", "A", "a much longer clinician name"] {
            let (enc, pat) = fixtures("Malaria", Some(name));
            let claim = claim_from_encounter(&enc, &pat);
            assert!(shape.is_match(&claim.provider.unwrap().reference));
        }
    }

    #[test]
    fn preview_shape() {
        let (enc, pat) = fixtures("Hypertension", None);
        let claim = claim_from_encounter(&enc, &pat);
        assert_eq!(claim.id, None);
        assert_eq!(claim.status, ClaimStatus::Active);
        assert_eq!(claim.resource_type, "Claim");
        assert_eq!(claim.use_, "claim");
        assert_eq!(claim.type_.coding[0].code, "institutional");
        assert_eq!(claim.type_.coding[0].system.as_deref(), Some(CLAIM_TYPE_SYSTEM));
        assert_eq!(claim.priority.coding[0].code, "normal");
        assert_eq!(claim.item.len(), 1);
        assert_eq!(claim.item[0].sequence, 1);
        assert_eq!(claim.item[0].serviced_date, enc.visit_date);
        assert_eq!(claim.patient.target_id(), Some(pat.id));
        assert_eq!(claim.encounter.target_id(), Some(enc.id));
        assert_eq!(claim.total.value, claim.line_item_total());
    }
}
