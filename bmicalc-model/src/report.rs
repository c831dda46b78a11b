use strum::Display;

use crate::submission::Submission;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Category {
    Underweight,
    #[strum(serialize = "Normal weight")]
    NormalWeight,
    Overweight,
    Obesity,
}

impl Category {
    /// Bands are closed on the left: 18.5 is already normal weight,
    /// 25 already overweight, 30 already obesity.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Category::Underweight
        } else if bmi < 25.0 {
            Category::NormalWeight
        } else if bmi < 30.0 {
            Category::Overweight
        } else {
            Category::Obesity
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            Category::Underweight => "Eat more nutritious food and consult a dietitian.",
            Category::NormalWeight => "Maintain your current lifestyle!",
            Category::Overweight => "Exercise regularly and monitor your diet.",
            Category::Obesity => "Seek medical advice for a personalized plan.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmiReport {
    bmi: f64,
    category: Category,
}

impl BmiReport {
    /// BMI is rounded to two decimals before classification, so a raw value
    /// that rounds up to a band boundary lands in the upper band.
    pub fn evaluate(submission: &Submission) -> Self {
        let raw = submission.weight_kg() / submission.height_m().powf(2.0);
        let bmi = (raw * 100.0).round() / 100.0;

        Self {
            bmi,
            category: Category::from_bmi(bmi),
        }
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
