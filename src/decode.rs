use serde_json::Value as JsonValue;

use crate::{
    wire, BillingPeriod, ClassSession, FitClubError, Lead, LeadReceipt, MembershipPlan, Trainer,
};

/// Unwraps the service envelope, returning the `data` payload.
///
/// A non-success envelope becomes [`FitClubError::Service`]; a success
/// envelope without `data` is a shape violation.
pub(crate) fn unwrap_envelope(value: JsonValue) -> Result<JsonValue, FitClubError> {
    let envelope: wire::Envelope = serde_json::from_value(value)
        .map_err(|err| FitClubError::Decode(format!("invalid response envelope: {err}")))?;

    if envelope.status != "success" {
        return Err(FitClubError::Service {
            message: envelope
                .message
                .unwrap_or_else(|| format!("service reported status '{}'", envelope.status)),
            code: envelope.code,
        });
    }

    envelope
        .data
        .ok_or_else(|| FitClubError::Decode("missing data payload in success envelope".to_owned()))
}

pub(crate) fn decode_class_schedule(value: JsonValue) -> Result<Vec<ClassSession>, FitClubError> {
    let entries: Vec<wire::ClassEntry> = serde_json::from_value(unwrap_envelope(value)?)
        .map_err(|err| FitClubError::Decode(format!("invalid class schedule: {err}")))?;

    Ok(entries
        .into_iter()
        .map(|entry| ClassSession {
            id: entry.id,
            name: entry.name,
            trainer: entry.trainer,
            weekday: entry.weekday,
            start: entry.start,
            duration_min: entry.duration_min,
            level: entry.level,
            spots_left: entry.spots_left,
        })
        .collect())
}

pub(crate) fn decode_trainers(value: JsonValue) -> Result<Vec<Trainer>, FitClubError> {
    let entries: Vec<wire::TrainerEntry> = serde_json::from_value(unwrap_envelope(value)?)
        .map_err(|err| FitClubError::Decode(format!("invalid trainer list: {err}")))?;

    Ok(entries
        .into_iter()
        .map(|entry| Trainer {
            id: entry.id,
            name: entry.name,
            specialty: entry.specialty,
            bio: entry.bio,
            photo: entry.photo,
        })
        .collect())
}

pub(crate) fn decode_membership_plans(
    value: JsonValue,
) -> Result<Vec<MembershipPlan>, FitClubError> {
    let entries: Vec<wire::PlanEntry> = serde_json::from_value(unwrap_envelope(value)?)
        .map_err(|err| FitClubError::Decode(format!("invalid plan list: {err}")))?;

    entries
        .into_iter()
        .map(|entry| {
            Ok(MembershipPlan {
                id: entry.id,
                name: entry.name,
                price_cents: parse_price_cents(&entry.price)?,
                period: parse_billing_period(&entry.period)?,
                features: entry.features,
            })
        })
        .collect()
}

pub(crate) fn decode_lead_receipt(value: JsonValue) -> Result<LeadReceipt, FitClubError> {
    let entry: wire::LeadReceiptEntry = serde_json::from_value(unwrap_envelope(value)?)
        .map_err(|err| FitClubError::Decode(format!("invalid lead receipt: {err}")))?;

    Ok(LeadReceipt {
        received: entry.received,
        ticket_id: entry.ticket_id,
    })
}

/// Validates a lead and serializes it into the contact-endpoint payload.
pub(crate) fn build_lead_payload(lead: &Lead) -> Result<JsonValue, FitClubError> {
    let name = lead.name.trim();
    let email = lead.email.trim();

    if name.is_empty() {
        return Err(FitClubError::InvalidRequest(
            "lead name cannot be empty".to_owned(),
        ));
    }
    if email.is_empty() {
        return Err(FitClubError::InvalidRequest(
            "lead email cannot be empty".to_owned(),
        ));
    }
    if !email.contains('@') {
        return Err(FitClubError::InvalidRequest(format!(
            "lead email '{email}' is not an address"
        )));
    }

    let payload = wire::LeadPayload {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: lead.phone.clone(),
        message: lead.message.clone(),
    };
    serde_json::to_value(payload)
        .map_err(|err| FitClubError::Decode(format!("lead payload serialization failed: {err}")))
}

/// Parses a decimal price string (`"29.99"`, `"29.5"`, `"29"`) into cents.
fn parse_price_cents(price: &str) -> Result<u64, FitClubError> {
    let trimmed = price.trim();
    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    let digits_only = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    if whole.is_empty() || !digits_only(whole) || frac.len() > 2 || !digits_only(frac) {
        return Err(FitClubError::Decode(format!("invalid price '{price}'")));
    }

    let whole: u64 = whole
        .parse()
        .map_err(|err| FitClubError::Decode(format!("invalid price '{price}': {err}")))?;
    let frac_cents = if frac.is_empty() {
        0
    } else {
        let parsed: u64 = frac
            .parse()
            .map_err(|err| FitClubError::Decode(format!("invalid price '{price}': {err}")))?;
        if frac.len() == 1 {
            parsed * 10
        } else {
            parsed
        }
    };

    whole
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(frac_cents))
        .ok_or_else(|| FitClubError::Decode(format!("price '{price}' out of range")))
}

fn parse_billing_period(period: &str) -> Result<BillingPeriod, FitClubError> {
    if period.eq_ignore_ascii_case("week") {
        Ok(BillingPeriod::Week)
    } else if period.eq_ignore_ascii_case("month") {
        Ok(BillingPeriod::Month)
    } else if period.eq_ignore_ascii_case("year") {
        Ok(BillingPeriod::Year)
    } else {
        Err(FitClubError::Decode(format!(
            "unknown billing period '{period}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{parse_billing_period, parse_price_cents};
    use crate::{decode, BillingPeriod, FitClubError, Lead};

    #[test]
    fn envelope_error_status_becomes_service_error() {
        let err = decode::unwrap_envelope(json!({
            "status": "error",
            "message": "club is closed",
            "code": "CLUB_CLOSED"
        }))
        .expect_err("must fail");

        match err {
            FitClubError::Service { message, code } => {
                assert_eq!(message, "club is closed");
                assert_eq!(code.as_deref(), Some("CLUB_CLOSED"));
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn envelope_success_without_data_is_decode_error() {
        let err = decode::unwrap_envelope(json!({"status": "success"})).expect_err("must fail");
        assert!(matches!(err, FitClubError::Decode(_)));
    }

    #[test]
    fn class_schedule_decodes_optional_fields() {
        let sessions = decode::decode_class_schedule(json!({
            "status": "success",
            "data": [
                {
                    "id": 1,
                    "name": "Spin 45",
                    "trainer": "Maya",
                    "weekday": "monday",
                    "start": "07:30",
                    "duration_min": 45,
                    "level": "all",
                    "spots_left": 6
                },
                {
                    "id": 2,
                    "name": "Open Gym",
                    "weekday": "saturday",
                    "start": "10:00"
                }
            ]
        }))
        .expect("must decode");

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].trainer.as_deref(), Some("Maya"));
        assert_eq!(sessions[1].trainer, None);
        assert_eq!(sessions[1].duration_min, None);
    }

    #[test]
    fn plan_price_and_period_are_normalized() {
        let plans = decode::decode_membership_plans(json!({
            "status": "success",
            "data": [
                {
                    "id": 10,
                    "name": "All Access",
                    "price": "49.99",
                    "period": "Month",
                    "features": ["24/7 entry", "group classes"]
                }
            ]
        }))
        .expect("must decode");

        assert_eq!(plans[0].price_cents, 4_999);
        assert_eq!(plans[0].period, BillingPeriod::Month);
        assert_eq!(plans[0].features.len(), 2);
    }

    #[test]
    fn price_parsing_accepts_short_fractions() {
        assert_eq!(parse_price_cents("29").unwrap(), 2_900);
        assert_eq!(parse_price_cents("29.5").unwrap(), 2_950);
        assert_eq!(parse_price_cents("29.99").unwrap(), 2_999);
    }

    #[test]
    fn price_parsing_rejects_malformed_strings() {
        for bad in ["", ".", "29.999", "29,99", "-5", "abc"] {
            assert!(
                parse_price_cents(bad).is_err(),
                "price '{bad}' must be rejected"
            );
        }
    }

    #[test]
    fn unknown_billing_period_is_decode_error() {
        let err = parse_billing_period("fortnight").expect_err("must fail");
        assert!(matches!(err, FitClubError::Decode(_)));
    }

    #[test]
    fn lead_payload_requires_name_and_address() {
        let err = decode::build_lead_payload(&Lead::new("  ", "kit@example.com"))
            .expect_err("must fail");
        assert!(matches!(err, FitClubError::InvalidRequest(_)));

        let err =
            decode::build_lead_payload(&Lead::new("Kit", "not-an-address")).expect_err("must fail");
        assert!(matches!(err, FitClubError::InvalidRequest(_)));
    }

    #[test]
    fn lead_payload_omits_absent_optional_fields() {
        let payload = decode::build_lead_payload(&Lead::new("Kit", "kit@example.com"))
            .expect("must build payload");
        let object = payload.as_object().expect("must be an object");
        assert!(!object.contains_key("phone"));
        assert!(!object.contains_key("message"));
        assert_eq!(object["email"], "kit@example.com");
    }
}
