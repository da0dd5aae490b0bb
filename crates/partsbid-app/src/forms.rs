// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use serde::Serialize;

use crate::{PartSelection, VehicleInfo, normalize_registration};

pub const REVIEW_COMMENT_MAX_CHARS: usize = 500;
pub const MIN_REVIEW_RATING: u8 = 1;
pub const MAX_REVIEW_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewInput {
    pub rating: u8,
    pub comment: String,
}

impl ReviewInput {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&self.rating) {
            bail!(
                "review rating must be between {MIN_REVIEW_RATING} and {MAX_REVIEW_RATING}, got {}",
                self.rating
            );
        }
        let chars = self.comment.chars().count();
        if chars > REVIEW_COMMENT_MAX_CHARS {
            bail!(
                "review comment is {chars} characters; shorten it to {REVIEW_COMMENT_MAX_CHARS} or fewer"
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancellationInput {
    pub reason: String,
}

impl CancellationInput {
    pub fn validate(&self) -> Result<()> {
        if self.reason.trim().is_empty() {
            bail!("cancellation reason is required -- enter a reason and retry");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRequestInput {
    pub vehicle: VehicleInfo,
    pub part: PartSelection,
}

impl QuoteRequestInput {
    pub fn validate(&self) -> Result<()> {
        self.vehicle.validate()?;
        if self.part.name.trim().is_empty() {
            bail!("part name is required -- pick a part and retry");
        }
        if self.part.price_cents < 0 {
            bail!("part reference price cannot be negative");
        }
        Ok(())
    }
}

impl VehicleInfo {
    pub fn validate(&self) -> Result<()> {
        if self.make.trim().is_empty() {
            bail!("vehicle make is required -- enter a make and retry");
        }
        if self.model.trim().is_empty() {
            bail!("vehicle model is required -- enter a model and retry");
        }
        let year = self.year.trim();
        if year.len() != 4 || !year.chars().all(|ch| ch.is_ascii_digit()) {
            bail!("vehicle year must be four digits, got {:?}", self.year);
        }
        Ok(())
    }
}

/// Parses manual vehicle entry of the form `make, model, year[, registration]`.
pub fn parse_manual_vehicle(raw: &str) -> Result<VehicleInfo> {
    let parts = raw.split(',').map(str::trim).collect::<Vec<_>>();
    let (make, model, year, registration) = match parts.as_slice() {
        [make, model, year] => (*make, *model, *year, None),
        [make, model, year, registration] if !registration.is_empty() => {
            (*make, *model, *year, Some(normalize_registration(registration)))
        }
        [make, model, year, _] => (*make, *model, *year, None),
        _ => bail!("enter the vehicle as `make, model, year` with an optional `, registration`"),
    };
    let vehicle = VehicleInfo {
        make: make.to_owned(),
        model: model.to_owned(),
        year: year.to_owned(),
        registration,
    };
    vehicle.validate()?;
    Ok(vehicle)
}

pub fn validate_registration(raw: &str) -> Result<String> {
    let normalized = normalize_registration(raw);
    if normalized.is_empty() {
        bail!("registration is required -- enter a plate and retry");
    }
    if normalized.len() > 10 || !normalized.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        bail!("registration {raw:?} is not a valid plate; use letters and digits only");
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::{
        CancellationInput, QuoteRequestInput, REVIEW_COMMENT_MAX_CHARS, ReviewInput,
        parse_manual_vehicle, validate_registration,
    };
    use crate::{PartSelection, VehicleInfo};
    use anyhow::Result;

    #[test]
    fn review_rating_must_be_in_range() {
        for rating in [0_u8, 6] {
            let error = ReviewInput {
                rating,
                comment: String::new(),
            }
            .validate()
            .expect_err("out of range rating should fail");
            assert!(error.to_string().contains("between 1 and 5"));
        }
        for rating in 1_u8..=5 {
            assert!(
                ReviewInput {
                    rating,
                    comment: "fine".to_owned()
                }
                .validate()
                .is_ok()
            );
        }
    }

    #[test]
    fn review_comment_limit_counts_characters_not_bytes() {
        let at_limit = ReviewInput {
            rating: 4,
            comment: "é".repeat(REVIEW_COMMENT_MAX_CHARS),
        };
        assert!(at_limit.validate().is_ok());

        let over = ReviewInput {
            rating: 4,
            comment: "a".repeat(REVIEW_COMMENT_MAX_CHARS + 1),
        };
        let error = over.validate().expect_err("long comment should fail");
        assert!(error.to_string().contains("501 characters"));
    }

    #[test]
    fn cancellation_requires_reason() {
        let error = CancellationInput {
            reason: "   ".to_owned(),
        }
        .validate()
        .expect_err("blank reason should fail");
        assert!(error.to_string().contains("reason is required"));
    }

    #[test]
    fn manual_vehicle_entry_parses_optional_registration() -> Result<()> {
        let vehicle = parse_manual_vehicle("Ford, Focus, 2020")?;
        assert_eq!(vehicle, VehicleInfo::new("Ford", "Focus", "2020"));

        let with_plate = parse_manual_vehicle("Vauxhall, Corsa, 2016, ab12 cde")?;
        assert_eq!(with_plate.registration.as_deref(), Some("AB12CDE"));
        Ok(())
    }

    #[test]
    fn manual_vehicle_entry_rejects_bad_year_and_shape() {
        let error = parse_manual_vehicle("Ford, Focus, 20").expect_err("short year");
        assert!(error.to_string().contains("four digits"));

        let error = parse_manual_vehicle("Ford Focus").expect_err("missing fields");
        assert!(error.to_string().contains("make, model, year"));
    }

    #[test]
    fn quote_request_validates_vehicle_and_part() {
        let request = QuoteRequestInput {
            vehicle: VehicleInfo::new("", "Focus", "2020"),
            part: PartSelection {
                name: "Oil filter".to_owned(),
                category: "Filters".to_owned(),
                price_cents: 899,
                image: String::new(),
            },
        };
        let error = request.validate().expect_err("missing make");
        assert!(error.to_string().contains("make is required"));
    }

    #[test]
    fn registration_validation_normalizes_plate() -> Result<()> {
        assert_eq!(validate_registration(" ab12 cde ")?, "AB12CDE");
        assert!(validate_registration("AB-12").is_err());
        assert!(validate_registration("  ").is_err());
        Ok(())
    }
}
