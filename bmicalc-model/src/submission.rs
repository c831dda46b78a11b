use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("weight is missing")]
    MissingWeight,
    #[error("height is missing")]
    MissingHeight,
    #[error("weight must be a positive number")]
    InvalidWeight,
    #[error("height must be a positive number")]
    InvalidHeight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender \"{}\"", s)),
        }
    }
}

/// One form submission, validated. Weight and height are the only fields
/// the calculation reads; age and gender are carried as submitted.
#[derive(Debug)]
pub struct Submission {
    weight_kg: f64,
    height_m: f64,
    age: Option<u32>,
    gender: Option<Gender>,
}

impl Submission {
    pub fn parse(
        weight: Option<&str>,
        height: Option<&str>,
        age: Option<&str>,
        gender: Option<&str>,
    ) -> Result<Self, InvalidInput> {
        let weight_kg = parse_positive(
            weight,
            InvalidInput::MissingWeight,
            InvalidInput::InvalidWeight,
        )?;
        let height_m = parse_positive(
            height,
            InvalidInput::MissingHeight,
            InvalidInput::InvalidHeight,
        )?;

        // Unparseable age or gender is dropped, not rejected; the form marks
        // them required but the result never depends on them.
        let age = age.and_then(|s| s.trim().parse().ok());
        let gender = gender.and_then(|s| Gender::from_str(s.trim()).ok());

        Ok(Self {
            weight_kg,
            height_m,
            age,
            gender,
        })
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }
}

fn parse_positive(
    raw: Option<&str>,
    missing: InvalidInput,
    invalid: InvalidInput,
) -> Result<f64, InvalidInput> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(missing)?;
    let value: f64 = raw.parse().map_err(|_| invalid)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_positive_measurements() {
        let submission =
            Submission::parse(Some("70"), Some("1.75"), Some("30"), Some("male")).unwrap();

        assert_eq!(submission.weight_kg(), 70.0);
        assert_eq!(submission.height_m(), 1.75);
        assert_eq!(submission.age(), Some(30));
        assert_eq!(submission.gender(), Some(Gender::Male));
    }

    #[test]
    fn parse_rejects_missing_or_invalid_measurements() {
        let test_data = [
            ((None, Some("1.75")), InvalidInput::MissingWeight),
            ((Some(""), Some("1.75")), InvalidInput::MissingWeight),
            ((Some("   "), Some("1.75")), InvalidInput::MissingWeight),
            ((Some("0"), Some("1.75")), InvalidInput::InvalidWeight),
            ((Some("-5"), Some("1.75")), InvalidInput::InvalidWeight),
            ((Some("abc"), Some("1.75")), InvalidInput::InvalidWeight),
            ((Some("NaN"), Some("1.75")), InvalidInput::InvalidWeight),
            ((Some("70"), None), InvalidInput::MissingHeight),
            ((Some("70"), Some("")), InvalidInput::MissingHeight),
            ((Some("70"), Some("0")), InvalidInput::InvalidHeight),
            ((Some("70"), Some("-1.75")), InvalidInput::InvalidHeight),
            ((Some("70"), Some("tall")), InvalidInput::InvalidHeight),
        ];

        for (i, ((weight, height), expected)) in test_data.into_iter().enumerate() {
            let error = Submission::parse(weight, height, Some("30"), Some("male")).unwrap_err();
            assert_eq!(error, expected, "Test case #{}", i);
        }
    }

    #[test]
    fn parse_tolerates_bad_age_and_gender() {
        let test_data = [
            ((None, None), (None, None)),
            ((Some("thirty"), Some("other")), (None, None)),
            ((Some("-4"), Some("MALE")), (None, None)),
            ((Some("41"), Some("female")), (Some(41), Some(Gender::Female))),
        ];

        for (i, ((age, gender), (expected_age, expected_gender))) in
            test_data.into_iter().enumerate()
        {
            let submission = Submission::parse(Some("70"), Some("1.75"), age, gender).unwrap();
            assert_eq!(submission.age(), expected_age, "Test case #{}", i);
            assert_eq!(submission.gender(), expected_gender, "Test case #{}", i);
        }
    }

    #[test]
    fn invalid_input_names_the_offending_field() {
        assert_eq!(
            InvalidInput::InvalidWeight.to_string(),
            "weight must be a positive number"
        );
        assert_eq!(InvalidInput::MissingHeight.to_string(), "height is missing");
    }
}
